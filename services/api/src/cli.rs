use crate::demo::{run_demo, run_quote, DemoArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use palanca::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Palanca Real Listings Service",
    about = "Run and demo the Palanca Real listings service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Financing tools for quick what-if checks
    Financing {
        #[command(subcommand)]
        command: FinancingCommand,
    },
    /// Run an end-to-end CLI demo over the sample catalog
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FinancingCommand {
    /// Produce a fixed-rate financing quote for the given loan terms
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Financing {
            command: FinancingCommand::Quote(args),
        } => run_quote(args),
        Command::Demo(args) => run_demo(args),
    }
}
