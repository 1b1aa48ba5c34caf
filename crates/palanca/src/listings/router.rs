use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AgentId, ContactSubmission, PropertyId, PropertyKind};
use super::filter::PropertyFilter;
use super::repository::{
    AgentRepository, ContactRepository, ListingRepository, RepositoryError,
};
use super::service::{CatalogError, CatalogService};
use crate::finance::{FinancingCalculator, LoanTerms};
use crate::scoring::{ComparisonSet, ScoringEngine};

/// Shared state wiring the catalog service and both calculation engines into
/// the public router.
pub struct CatalogRouterState<L, A, C> {
    pub service: Arc<CatalogService<L, A, C>>,
    pub scoring: Arc<ScoringEngine>,
    pub financing: Arc<FinancingCalculator>,
}

impl<L, A, C> Clone for CatalogRouterState<L, A, C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            scoring: self.scoring.clone(),
            financing: self.financing.clone(),
        }
    }
}

/// Router builder exposing the public marketplace endpoints.
pub fn catalog_router<L, A, C>(state: CatalogRouterState<L, A, C>) -> Router
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    Router::new()
        .route("/api/v1/properties", get(search_handler::<L, A, C>))
        .route(
            "/api/v1/properties/featured",
            get(featured_handler::<L, A, C>),
        )
        .route(
            "/api/v1/properties/compare",
            post(compare_handler::<L, A, C>),
        )
        .route(
            "/api/v1/properties/:property_id",
            get(detail_handler::<L, A, C>),
        )
        .route("/api/v1/financing/quote", post(quote_handler::<L, A, C>))
        .route("/api/v1/agents", get(agents_handler::<L, A, C>))
        .route("/api/v1/agents/:agent_id", get(agent_handler::<L, A, C>))
        .route(
            "/api/v1/contacts",
            post(contact_handler::<L, A, C>).get(contacts_handler::<L, A, C>),
        )
        .with_state(state)
}

/// Raw search parameters; unknown kinds (including the form's "all") simply
/// disable that constraint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingQuery {
    pub(crate) city: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) min_price: Option<u64>,
    pub(crate) max_price: Option<u64>,
    pub(crate) bedrooms: Option<u8>,
}

impl ListingQuery {
    fn into_filter(self) -> PropertyFilter {
        PropertyFilter {
            city: self.city,
            kind: self.kind.as_deref().and_then(PropertyKind::parse),
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    pub(crate) property_ids: Vec<String>,
}

pub(crate) async fn search_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    Query(query): Query<ListingQuery>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.service.search(&query.into_filter()) {
        Ok(listings) => (StatusCode::OK, axum::Json(listings)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn featured_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.service.featured() {
        Ok(listings) => (StatusCode::OK, axum::Json(listings)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn detail_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    Path(property_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    let id = PropertyId(property_id);
    match state.service.property(&id) {
        Ok(property) => (StatusCode::OK, axum::Json(property)).into_response(),
        Err(CatalogError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "property not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn compare_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    let mut set = ComparisonSet::new();

    for raw_id in request.property_ids {
        let id = PropertyId(raw_id);
        let property = match state.service.property(&id) {
            Ok(property) => property,
            Err(CatalogError::Repository(RepositoryError::NotFound)) => {
                let payload = json!({ "error": format!("property '{}' not found", id.0) });
                return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
            }
            Err(error) => return internal_error(error),
        };

        if let Err(rejection) = set.add(property, &state.scoring) {
            let payload = json!({ "error": rejection.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    }

    (StatusCode::OK, axum::Json(set.view())).into_response()
}

pub(crate) async fn quote_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    axum::Json(terms): axum::Json<LoanTerms>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.financing.quote(&terms) {
        Ok(quote) => {
            let affordability = state.financing.affordability(quote.monthly_payment);
            let payload = json!({
                "quote": quote,
                "affordability": affordability,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn agents_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.service.agents() {
        Ok(agents) => (StatusCode::OK, axum::Json(agents)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn agent_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    Path(agent_id): Path<String>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    let id = AgentId(agent_id);
    match state.service.agent(&id) {
        Ok(agent) => (StatusCode::OK, axum::Json(agent)).into_response(),
        Err(CatalogError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "agent not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn contact_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
    axum::Json(submission): axum::Json<ContactSubmission>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.service.submit_contact(submission) {
        Ok(contact) => (StatusCode::CREATED, axum::Json(contact)).into_response(),
        Err(CatalogError::Contact(rejection)) => {
            let payload = json!({ "error": rejection.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn contacts_handler<L, A, C>(
    State(state): State<CatalogRouterState<L, A, C>>,
) -> Response
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    match state.service.contacts() {
        Ok(contacts) => (StatusCode::OK, axum::Json(contacts)).into_response(),
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: CatalogError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
