use chrono::{TimeZone, Utc};

use crate::listings::domain::{AgentId, Property, PropertyId, PropertyKind, PropertyStatus};
use crate::scoring::{ScoringConfig, ScoringEngine};

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        primary_city: "Luanda".to_string(),
        secondary_city: "Benguela".to_string(),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(scoring_config())
}

pub(super) fn listing(
    id: &str,
    price: u64,
    area: u32,
    bedrooms: Option<u8>,
    city: &str,
    feature_count: usize,
) -> Property {
    let stamp = Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap();
    Property {
        id: PropertyId(id.to_string()),
        title: format!("Listing {id}"),
        description: String::new(),
        price,
        currency: "AOA".to_string(),
        kind: PropertyKind::Apartment,
        status: PropertyStatus::Available,
        bedrooms,
        bathrooms: Some(2),
        area,
        neighborhood: "Centro".to_string(),
        city: city.to_string(),
        province: city.to_string(),
        address: "Rua Principal".to_string(),
        features: (0..feature_count).map(|n| format!("amenity-{n}")).collect(),
        images: Vec::new(),
        agent_id: AgentId("agent-1".to_string()),
        featured: false,
        created_at: stamp,
        updated_at: stamp,
    }
}
