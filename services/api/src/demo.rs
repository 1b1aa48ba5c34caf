use crate::infra::{
    InMemoryAgentRepository, InMemoryContactRepository, InMemoryListingRepository,
};
use crate::seed;
use clap::Args;
use palanca::config::AppConfig;
use palanca::error::AppError;
use palanca::finance::{FinanceConfig, FinancingCalculator, LoanTerms};
use palanca::listings::{
    AgentRepository, CatalogError, CatalogService, ListingCsvImporter, PropertyFilter,
};
use palanca::scoring::{ComparisonSet, ScoringConfig, ScoringEngine};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Property value in AOA
    #[arg(long)]
    pub(crate) property_value: f64,
    /// Down payment as a percentage of the property value
    #[arg(long, default_value_t = 20.0)]
    pub(crate) down_payment_percent: f64,
    /// Annual interest rate percentage
    #[arg(long, default_value_t = 12.0)]
    pub(crate) annual_interest_rate_percent: f64,
    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    pub(crate) term_years: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional listings CSV export to hydrate the catalog instead of the
    /// built-in samples
    #[arg(long)]
    pub(crate) listings_csv: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let calculator = FinancingCalculator::new(FinanceConfig {
        reference_monthly_income: config.market.reference_monthly_income,
    });

    let terms = LoanTerms {
        property_value: args.property_value,
        down_payment_percent: args.down_payment_percent,
        annual_interest_rate_percent: args.annual_interest_rate_percent,
        term_years: args.term_years,
    };

    match calculator.quote(&terms) {
        Ok(quote) => {
            let affordability = calculator.affordability(quote.monthly_payment);
            println!(
                "Financing quote for a {:.0} AOA property",
                terms.property_value
            );
            println!(
                "- down payment ({}%): {:.0} AOA",
                terms.down_payment_percent, quote.down_payment
            );
            println!("- financed amount: {:.0} AOA", quote.loan_amount);
            println!(
                "- monthly payment over {} years at {}%: {:.0} AOA",
                terms.term_years, terms.annual_interest_rate_percent, quote.monthly_payment
            );
            println!(
                "- total paid: {:.0} AOA | interest share: {:.0} AOA",
                quote.total_payment, quote.total_interest
            );
            println!(
                "- affordability: {:.1}% of the reference income ({})",
                affordability.income_ratio * 100.0,
                affordability.tier.label()
            );
        }
        Err(err) => println!("Cannot quote these terms: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let listings = Arc::new(InMemoryListingRepository::default());
    let agents = Arc::new(InMemoryAgentRepository::default());
    let contacts = Arc::new(InMemoryContactRepository::default());
    let service = CatalogService::new(listings.clone(), agents.clone(), contacts);

    if let Some(path) = args.listings_csv {
        for agent in seed::sample_agents() {
            agents.insert(agent).map_err(CatalogError::from)?;
        }
        for new_property in ListingCsvImporter::from_path(path)? {
            service.publish(new_property)?;
        }
    } else {
        seed::apply(listings.as_ref(), agents.as_ref()).map_err(CatalogError::from)?;
    }

    let engine = ScoringEngine::new(ScoringConfig {
        primary_city: config.market.primary_city.clone(),
        secondary_city: config.market.secondary_city.clone(),
    });
    let calculator = FinancingCalculator::new(FinanceConfig {
        reference_monthly_income: config.market.reference_monthly_income,
    });

    let catalog = service.search(&PropertyFilter::default())?;

    println!("Palanca Real catalog demo");
    println!("Catalog ({} listings):", catalog.len());
    for property in &catalog {
        let breakdown = engine.score(property);
        println!(
            "- [{:>3}/100 {}] {} | {} | {} {}",
            breakdown.total,
            breakdown.tier.label(),
            property.title,
            property.city,
            property.price,
            property.currency
        );
    }

    let mut comparison = ComparisonSet::new();
    for property in catalog.iter().take(ComparisonSet::CAPACITY) {
        if let Err(err) = comparison.add(property.clone(), &engine) {
            println!("skipping {}: {err}", property.title);
        }
    }

    println!("\nSide-by-side comparison:");
    for entry in comparison.view().entries {
        let mut badges = Vec::new();
        if entry.best_price {
            badges.push("best price");
        }
        if entry.best_area {
            badges.push("best area");
        }
        if entry.best_bedrooms {
            badges.push("best bedrooms");
        }
        if entry.best_bathrooms {
            badges.push("best bathrooms");
        }
        let badges = if badges.is_empty() {
            String::new()
        } else {
            format!(" | {}", badges.join(", "))
        };
        println!(
            "- {}: {}/100 ({}){}",
            entry.title,
            entry.score,
            entry.tier.label(),
            badges
        );
    }

    if let Some(property) = catalog.first() {
        println!("\nFinancing the newest listing (20% down, 12% over 30 years):");
        let terms = LoanTerms {
            property_value: property.price as f64,
            down_payment_percent: 20.0,
            annual_interest_rate_percent: 12.0,
            term_years: 30,
        };
        match calculator.quote(&terms) {
            Ok(quote) => {
                let affordability = calculator.affordability(quote.monthly_payment);
                println!(
                    "- {}: {:.0} AOA/month, {:.1}% of the reference income ({})",
                    property.title,
                    quote.monthly_payment,
                    affordability.income_ratio * 100.0,
                    affordability.tier.label()
                );
            }
            Err(err) => println!("- cannot quote {}: {err}", property.title),
        }
    }

    Ok(())
}
