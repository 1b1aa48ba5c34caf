//! End-to-end specifications for the public catalog API.
//!
//! Scenarios run through the HTTP router against in-memory repositories so
//! search, comparison, financing, and contact intake are validated the way a
//! browser exercises them.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::response::Response;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use palanca::finance::{FinanceConfig, FinancingCalculator};
    use palanca::listings::{
        catalog_router, Agent, AgentId, AgentRepository, CatalogRouterState, CatalogService,
        ContactRepository, ContactRequest, ListingRepository, Property, PropertyId, PropertyKind,
        PropertyStatus, RepositoryError,
    };
    use palanca::scoring::{ScoringConfig, ScoringEngine};

    #[derive(Default, Clone)]
    pub(super) struct MemoryListings {
        records: Arc<Mutex<HashMap<PropertyId, Property>>>,
    }

    impl ListingRepository for MemoryListings {
        fn insert(&self, property: Property) -> Result<Property, RepositoryError> {
            let mut guard = self.records.lock().expect("listing mutex poisoned");
            if guard.contains_key(&property.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(property.id.clone(), property.clone());
            Ok(property)
        }

        fn update(&self, property: Property) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("listing mutex poisoned");
            if guard.contains_key(&property.id) {
                guard.insert(property.id.clone(), property);
                Ok(())
            } else {
                Err(RepositoryError::NotFound)
            }
        }

        fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
            let guard = self.records.lock().expect("listing mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn delete(&self, id: &PropertyId) -> Result<bool, RepositoryError> {
            let mut guard = self.records.lock().expect("listing mutex poisoned");
            Ok(guard.remove(id).is_some())
        }

        fn all(&self) -> Result<Vec<Property>, RepositoryError> {
            let guard = self.records.lock().expect("listing mutex poisoned");
            Ok(guard.values().cloned().collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryAgents {
        records: Arc<Mutex<HashMap<AgentId, Agent>>>,
    }

    impl AgentRepository for MemoryAgents {
        fn insert(&self, agent: Agent) -> Result<Agent, RepositoryError> {
            let mut guard = self.records.lock().expect("agent mutex poisoned");
            if guard.contains_key(&agent.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(agent.id.clone(), agent.clone());
            Ok(agent)
        }

        fn fetch(&self, id: &AgentId) -> Result<Option<Agent>, RepositoryError> {
            let guard = self.records.lock().expect("agent mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn all(&self) -> Result<Vec<Agent>, RepositoryError> {
            let guard = self.records.lock().expect("agent mutex poisoned");
            Ok(guard.values().cloned().collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryContacts {
        records: Arc<Mutex<Vec<ContactRequest>>>,
    }

    impl ContactRepository for MemoryContacts {
        fn insert(&self, contact: ContactRequest) -> Result<ContactRequest, RepositoryError> {
            let mut guard = self.records.lock().expect("contact mutex poisoned");
            guard.push(contact.clone());
            Ok(contact)
        }

        fn all(&self) -> Result<Vec<ContactRequest>, RepositoryError> {
            let guard = self.records.lock().expect("contact mutex poisoned");
            Ok(guard.clone())
        }
    }

    pub(super) fn listing(
        id: &str,
        price: u64,
        area: u32,
        bedrooms: Option<u8>,
        city: &str,
        day: u32,
    ) -> Property {
        let stamp = Utc.with_ymd_and_hms(2025, 7, day, 8, 0, 0).unwrap();
        Property {
            id: PropertyId(id.to_string()),
            title: format!("Listing {id}"),
            description: "Descricao".to_string(),
            price,
            currency: "AOA".to_string(),
            kind: if bedrooms.is_some() {
                PropertyKind::Apartment
            } else {
                PropertyKind::Commercial
            },
            status: PropertyStatus::Available,
            bedrooms,
            bathrooms: bedrooms.map(|count| count.max(1)),
            area,
            neighborhood: "Centro".to_string(),
            city: city.to_string(),
            province: city.to_string(),
            address: "Rua Principal".to_string(),
            features: vec!["Garagem".to_string(), "Varanda".to_string()],
            images: Vec::new(),
            agent_id: AgentId("agent-1".to_string()),
            featured: id.ends_with("-featured"),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    pub(super) fn agent(id: &str, name: &str) -> Agent {
        Agent {
            id: AgentId(id.to_string()),
            name: name.to_string(),
            email: format!("{name}@palancareal.ao").to_lowercase().replace(' ', "."),
            phone: "+244 923 456 789".to_string(),
            specialty: "Residencial".to_string(),
            experience_years: 5,
            sales_count: 80,
            photo: None,
            bio: None,
            social: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub(super) fn seeded_state() -> CatalogRouterState<MemoryListings, MemoryAgents, MemoryContacts>
    {
        let listings = Arc::new(MemoryListings::default());
        let agents = Arc::new(MemoryAgents::default());
        let contacts = Arc::new(MemoryContacts::default());

        for property in [
            listing("prop-luanda-featured", 85_000_000, 120, Some(3), "Luanda", 4),
            listing("prop-benguela", 120_000_000, 200, Some(4), "Benguela", 3),
            listing("prop-maianga", 45_000_000, 80, Some(2), "Luanda", 2),
            listing("prop-malanje", 35_000_000, 60, None, "Malanje", 1),
        ] {
            listings.insert(property).expect("seed listing");
        }

        agents.insert(agent("agent-1", "Joao Silva")).expect("seed agent");
        agents.insert(agent("agent-2", "Maria Santos")).expect("seed agent");

        let service = Arc::new(CatalogService::new(listings, agents, contacts));
        let scoring = Arc::new(ScoringEngine::new(ScoringConfig {
            primary_city: "Luanda".to_string(),
            secondary_city: "Benguela".to_string(),
        }));
        let financing = Arc::new(FinancingCalculator::new(FinanceConfig {
            reference_monthly_income: 2_000_000.0,
        }));

        CatalogRouterState {
            service,
            scoring,
            financing,
        }
    }

    pub(super) fn router() -> axum::Router {
        catalog_router(seeded_state())
    }

    pub(super) async fn get(router: axum::Router, uri: &str) -> Response {
        use tower::ServiceExt;

        router
            .oneshot(
                axum::http::Request::get(uri)
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes")
    }

    pub(super) async fn post_json(router: axum::Router, uri: &str, payload: Value) -> Response {
        use tower::ServiceExt;

        router
            .oneshot(
                axum::http::Request::post(uri)
                    .header(axum::http::header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(
                        serde_json::to_vec(&payload).unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes")
    }

    pub(super) async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn search_returns_listings_newest_first() {
    let response = get(router(), "/api/v1/properties").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let ids: Vec<&str> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id"))
        .collect();

    assert_eq!(
        ids,
        vec![
            "prop-luanda-featured",
            "prop-benguela",
            "prop-maianga",
            "prop-malanje"
        ]
    );
}

#[tokio::test]
async fn search_applies_city_and_price_constraints() {
    let response = get(
        router(),
        "/api/v1/properties?city=luanda&min_price=50000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let ids: Vec<&str> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["prop-luanda-featured"]);
}

#[tokio::test]
async fn search_treats_unknown_kind_as_no_constraint() {
    let response = get(router(), "/api/v1/properties?kind=all").await;
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().expect("array payload").len(), 4);
}

#[tokio::test]
async fn search_matches_bedrooms_exactly() {
    let response = get(router(), "/api/v1/properties?bedrooms=2").await;
    let payload = read_json_body(response).await;
    let ids: Vec<&str> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["prop-maianga"]);
}

#[tokio::test]
async fn featured_endpoint_returns_flagged_listings_only() {
    let response = get(router(), "/api/v1/properties/featured").await;
    let payload = read_json_body(response).await;
    let entries = payload.as_array().expect("array payload");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "prop-luanda-featured");
}

#[tokio::test]
async fn detail_returns_the_listing_or_a_not_found_payload() {
    let response = get(router(), "/api/v1/properties/prop-maianga").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["city"], "Luanda");
    assert_eq!(payload["bedrooms"], 2);

    let response = get(router(), "/api/v1/properties/prop-missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "property not found");
}

#[tokio::test]
async fn compare_scores_and_flags_each_column() {
    let request = json!({
        "property_ids": ["prop-luanda-featured", "prop-benguela", "prop-maianga"],
    });
    let response = get_compare(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let entries = payload["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 3);

    // Cheapest listing wins the price column, largest wins the area column.
    assert_eq!(entries[2]["best_price"], true);
    assert_eq!(entries[0]["best_price"], false);
    assert_eq!(entries[1]["best_area"], true);
    assert_eq!(entries[1]["best_bedrooms"], true);

    for entry in entries {
        let score = entry["score"].as_u64().expect("score");
        assert!(score <= 100);
        assert!(entry["tier"].is_string());
    }
}

async fn get_compare(request: serde_json::Value) -> axum::response::Response {
    post_json(router(), "/api/v1/properties/compare", request).await
}

#[tokio::test]
async fn compare_rejects_a_fourth_listing() {
    let request = json!({
        "property_ids": [
            "prop-luanda-featured",
            "prop-benguela",
            "prop-maianga",
            "prop-malanje"
        ],
    });
    let response = get_compare(request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("at most 3"));
}

#[tokio::test]
async fn compare_rejects_duplicate_ids() {
    let request = json!({
        "property_ids": ["prop-maianga", "prop-maianga"],
    });
    let response = get_compare(request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn compare_reports_unknown_listings() {
    let request = json!({
        "property_ids": ["prop-missing"],
    });
    let response = get_compare(request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("prop-missing"));
}

#[tokio::test]
async fn financing_quote_returns_schedule_and_affordability() {
    let request = json!({
        "property_value": 50_000_000.0,
        "down_payment_percent": 20.0,
        "annual_interest_rate_percent": 12.0,
        "term_years": 30,
    });
    let response = post_json(router(), "/api/v1/financing/quote", request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload["quote"]["down_payment"], 10_000_000.0);
    assert_eq!(payload["quote"]["loan_amount"], 40_000_000.0);

    let monthly = payload["quote"]["monthly_payment"]
        .as_f64()
        .expect("monthly payment");
    assert!((monthly / 411_451.0 - 1.0).abs() < 1e-3);
    assert_eq!(payload["affordability"]["tier"], "comfortable");
}

#[tokio::test]
async fn financing_quote_rejects_a_zero_term() {
    let request = json!({
        "property_value": 50_000_000.0,
        "down_payment_percent": 20.0,
        "annual_interest_rate_percent": 12.0,
        "term_years": 0,
    });
    let response = post_json(router(), "/api/v1/financing/quote", request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn agents_are_listed_and_fetched_by_id() {
    let response = get(router(), "/api/v1/agents").await;
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().expect("array payload").len(), 2);

    let response = get(router(), "/api/v1/agents/agent-2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["name"], "Maria Santos");

    let response = get(router(), "/api/v1/agents/agent-99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_intake_stores_valid_submissions() {
    let app = router();

    let request = json!({
        "name": "Ana Ferreira",
        "email": "ana@exemplo.ao",
        "phone": "+244 900 000 000",
        "interest": "comprar",
        "message": "Tenho interesse no apartamento.",
        "property_id": "prop-maianga",
    });
    let response = post_json(app.clone(), "/api/v1/contacts", request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload["id"]
        .as_str()
        .expect("generated id")
        .starts_with("contact-"));

    let response = get(app, "/api/v1/contacts").await;
    let payload = read_json_body(response).await;
    let stored = payload.as_array().expect("array payload");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["interest"], "comprar");
}

#[test]
fn service_supports_the_full_listing_lifecycle() {
    use palanca::listings::{NewAgent, NewProperty, PropertyKind, PropertyStatus, PropertyUpdate};

    let state = seeded_state();
    let service = state.service;

    let published = service
        .publish(NewProperty {
            title: "Vivenda no Namibe".to_string(),
            description: "Vivenda junto a baia.".to_string(),
            price: 70_000_000,
            currency: None,
            kind: PropertyKind::House,
            status: None,
            bedrooms: Some(3),
            bathrooms: Some(2),
            area: 140,
            neighborhood: "Baia".to_string(),
            city: "Namibe".to_string(),
            province: "Namibe".to_string(),
            address: "Rua da Baia, Casa 7".to_string(),
            features: vec!["Quintal".to_string()],
            images: Vec::new(),
            agent_id: palanca::listings::AgentId("agent-1".to_string()),
            featured: false,
        })
        .expect("publish succeeds");
    assert!(published.id.0.starts_with("prop-"));
    assert_eq!(published.currency, "AOA");
    assert_eq!(published.status, PropertyStatus::Available);

    let revised = service
        .revise(
            &published.id,
            PropertyUpdate {
                price: Some(68_000_000),
                status: Some(PropertyStatus::Sold),
                ..PropertyUpdate::default()
            },
        )
        .expect("revise succeeds");
    assert_eq!(revised.price, 68_000_000);
    assert_eq!(revised.status, PropertyStatus::Sold);
    assert!(revised.updated_at >= published.updated_at);

    assert!(service.withdraw(&published.id).expect("withdraw succeeds"));
    assert!(!service.withdraw(&published.id).expect("second withdraw is a no-op"));

    let registered = service
        .register_agent(NewAgent {
            name: "Rui Gomes".to_string(),
            email: "rui.gomes@palancareal.ao".to_string(),
            phone: "+244 923 456 793".to_string(),
            specialty: "Especialista em Namibe".to_string(),
            experience_years: 4,
            sales_count: 20,
            photo: None,
            bio: None,
            social: Vec::new(),
        })
        .expect("registration succeeds");
    assert!(registered.id.0.starts_with("agent-"));
    assert_eq!(service.agents().expect("agents listed").len(), 3);
}

#[tokio::test]
async fn contact_intake_rejects_invalid_submissions() {
    let request = json!({
        "name": "Ana Ferreira",
        "email": "not-an-email",
        "phone": "+244 900 000 000",
        "interest": "vender",
        "message": "Quero vender a minha casa.",
    });
    let response = post_json(router(), "/api/v1/contacts", request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("not-an-email"));
}
