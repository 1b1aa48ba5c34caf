use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAgentRepository, InMemoryContactRepository, InMemoryListingRepository,
};
use crate::routes::with_catalog_routes;
use crate::seed;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use palanca::config::AppConfig;
use palanca::error::AppError;
use palanca::finance::{FinanceConfig, FinancingCalculator};
use palanca::listings::{CatalogRouterState, CatalogService};
use palanca::scoring::{ScoringConfig, ScoringEngine};
use palanca::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let listings = Arc::new(InMemoryListingRepository::default());
    let agents = Arc::new(InMemoryAgentRepository::default());
    let contacts = Arc::new(InMemoryContactRepository::default());
    seed::apply(listings.as_ref(), agents.as_ref()).map_err(palanca::listings::CatalogError::from)?;

    let service = Arc::new(CatalogService::new(listings, agents, contacts));
    let scoring = Arc::new(ScoringEngine::new(ScoringConfig {
        primary_city: config.market.primary_city.clone(),
        secondary_city: config.market.secondary_city.clone(),
    }));
    let financing = Arc::new(FinancingCalculator::new(FinanceConfig {
        reference_monthly_income: config.market.reference_monthly_income,
    }));

    let router_state = CatalogRouterState {
        service,
        scoring,
        financing,
    };

    let app = with_catalog_routes(router_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "listings service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
