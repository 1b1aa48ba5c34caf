use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{AgentId, NewProperty, PropertyKind, PropertyStatus};

/// Errors raised while hydrating the catalog from a CSV export.
#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Record { line: u64, message: String },
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listings export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listings CSV data: {}", err),
            ListingImportError::Record { line, message } => {
                write!(f, "listings CSV line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::Record { .. } => None,
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Row shape of a listings export.
///
/// `features` and `images` cells hold `|`-separated values; blank optional
/// cells degrade to their defaults.
#[derive(Debug, Deserialize)]
struct RawListingRow {
    title: String,
    #[serde(default)]
    description: String,
    price: u64,
    #[serde(default)]
    currency: Option<String>,
    kind: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    bedrooms: Option<u8>,
    #[serde(default)]
    bathrooms: Option<u8>,
    area: u32,
    #[serde(default)]
    neighborhood: String,
    city: String,
    #[serde(default)]
    province: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    features: String,
    #[serde(default)]
    images: String,
    agent_id: String,
    #[serde(default)]
    featured: String,
}

pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewProperty>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewProperty>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawListingRow>().enumerate() {
            // Header occupies line 1.
            let line = index as u64 + 2;
            let row = row?;
            listings.push(convert_row(row, line)?);
        }

        Ok(listings)
    }
}

fn convert_row(row: RawListingRow, line: u64) -> Result<NewProperty, ListingImportError> {
    if row.title.is_empty() {
        return Err(ListingImportError::Record {
            line,
            message: "missing title".to_string(),
        });
    }
    if row.city.is_empty() {
        return Err(ListingImportError::Record {
            line,
            message: "missing city".to_string(),
        });
    }

    let kind = PropertyKind::parse(&row.kind).ok_or_else(|| ListingImportError::Record {
        line,
        message: format!("unknown listing kind '{}'", row.kind),
    })?;

    let status = match row.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(parse_status(raw).ok_or_else(|| ListingImportError::Record {
            line,
            message: format!("unknown listing status '{raw}'"),
        })?),
    };

    Ok(NewProperty {
        title: row.title,
        description: row.description,
        price: row.price,
        currency: row.currency.filter(|currency| !currency.is_empty()),
        kind,
        status,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        area: row.area,
        neighborhood: row.neighborhood,
        city: row.city,
        province: row.province,
        address: row.address,
        features: split_list(&row.features),
        images: split_list(&row.images),
        agent_id: AgentId(row.agent_id),
        featured: is_truthy(&row.featured),
    })
}

fn parse_status(raw: &str) -> Option<PropertyStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "available" => Some(PropertyStatus::Available),
        "sold" => Some(PropertyStatus::Sold),
        "rented" => Some(PropertyStatus::Rented),
        _ => None,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}
