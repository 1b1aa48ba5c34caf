use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default transaction currency for the Angolan market.
pub const DEFAULT_CURRENCY: &str = "AOA";

/// Identifier wrapper for published listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

/// Identifier wrapper for agency staff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

/// Identifier wrapper for stored contact requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub String);

/// Listing categories advertised on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment,
    House,
    Commercial,
    Land,
}

impl PropertyKind {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "apartment",
            PropertyKind::House => "house",
            PropertyKind::Commercial => "commercial",
            PropertyKind::Land => "land",
        }
    }

    /// Lenient parse used by query strings and CSV cells.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apartment" => Some(PropertyKind::Apartment),
            "house" => Some(PropertyKind::House),
            "commercial" => Some(PropertyKind::Commercial),
            "land" => Some(PropertyKind::Land),
            _ => None,
        }
    }
}

/// Commercial availability of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
    }
}

/// A published listing as stored in the catalog.
///
/// `price` is the asking amount in major units of `currency`; `area` is
/// square meters. `bedrooms`/`bathrooms` stay optional because commercial
/// and land listings do not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub currency: String,
    pub kind: PropertyKind,
    pub status: PropertyStatus,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub area: u32,
    pub neighborhood: String,
    pub city: String,
    pub province: String,
    pub address: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub agent_id: AgentId,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload accepted when publishing a new listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: u64,
    #[serde(default)]
    pub currency: Option<String>,
    pub kind: PropertyKind,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<u8>,
    pub area: u32,
    pub neighborhood: String,
    pub city: String,
    pub province: String,
    pub address: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub agent_id: AgentId,
    #[serde(default)]
    pub featured: bool,
}

/// Partial revision applied to an existing listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

/// Agency staff member shown on agent pages and attached to listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub experience_years: u8,
    pub sales_count: u32,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub social: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted when registering an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub experience_years: u8,
    #[serde(default)]
    pub sales_count: u32,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social: Vec<String>,
}

/// What a site visitor wants out of a contact request.
///
/// Wire values stay in Portuguese to match the public forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactInterest {
    #[serde(rename = "comprar")]
    Buy,
    #[serde(rename = "vender")]
    Sell,
    #[serde(rename = "arrendar")]
    Rent,
    #[serde(rename = "investir")]
    Invest,
}

impl ContactInterest {
    pub const fn label(self) -> &'static str {
        match self {
            ContactInterest::Buy => "comprar",
            ContactInterest::Sell => "vender",
            ContactInterest::Rent => "arrendar",
            ContactInterest::Invest => "investir",
        }
    }
}

/// Contact form payload as submitted by a visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: ContactInterest,
    pub message: String,
    #[serde(default)]
    pub property_id: Option<PropertyId>,
    #[serde(default)]
    pub agent_id: Option<AgentId>,
}

/// A validated, stored contact request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: ContactInterest,
    pub message: String,
    pub property_id: Option<PropertyId>,
    pub agent_id: Option<AgentId>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(PropertyKind::parse(" Apartment "), Some(PropertyKind::Apartment));
        assert_eq!(PropertyKind::parse("LAND"), Some(PropertyKind::Land));
        assert_eq!(PropertyKind::parse("castle"), None);
        assert_eq!(PropertyKind::parse("all"), None);
    }

    #[test]
    fn contact_interest_uses_portuguese_wire_values() {
        let interest: ContactInterest =
            serde_json::from_str("\"arrendar\"").expect("known interest");
        assert_eq!(interest, ContactInterest::Rent);
        assert_eq!(interest.label(), "arrendar");
        assert!(serde_json::from_str::<ContactInterest>("\"rent\"").is_err());
    }
}
