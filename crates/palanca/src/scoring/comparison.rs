use serde::Serialize;

use super::{ScoreBreakdown, ScoreTier, ScoringEngine};
use crate::listings::domain::{Property, PropertyId};

/// Bounded set of listings a visitor weighs side by side.
///
/// Scores are frozen when a listing is added so the comparison stays stable
/// while the visitor interacts with it, even if the catalog entry is revised
/// in the meantime. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct ComparisonSet {
    entries: Vec<ComparisonEntry>,
}

/// A compared listing together with its add-time score snapshot.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub property: Property,
    pub score: ScoreBreakdown,
}

/// Rejections surfaced by [`ComparisonSet::add`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("a comparison holds at most {} listings", ComparisonSet::CAPACITY)]
    CapacityExceeded,
    #[error("listing is already part of the comparison")]
    DuplicateEntry,
}

impl ComparisonSet {
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing, scoring it once with the supplied engine. The set is
    /// left untouched when the addition is rejected.
    pub fn add(
        &mut self,
        property: Property,
        engine: &ScoringEngine,
    ) -> Result<(), ComparisonError> {
        if self.entries.len() >= Self::CAPACITY {
            return Err(ComparisonError::CapacityExceeded);
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.property.id == property.id)
        {
            return Err(ComparisonError::DuplicateEntry);
        }

        let score = engine.score(&property);
        self.entries.push(ComparisonEntry { property, score });
        Ok(())
    }

    /// Remove a listing by id; returns whether anything was removed.
    pub fn remove(&mut self, id: &PropertyId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.property.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Render the comparison table, flagging the winner of each column.
    pub fn view(&self) -> ComparisonView {
        let prices: Vec<Option<f64>> = self
            .entries
            .iter()
            .map(|entry| Some(entry.property.price as f64))
            .collect();
        let areas: Vec<Option<f64>> = self
            .entries
            .iter()
            .map(|entry| Some(f64::from(entry.property.area)))
            .collect();
        let bedrooms: Vec<Option<f64>> = self
            .entries
            .iter()
            .map(|entry| entry.property.bedrooms.map(f64::from))
            .collect();
        let bathrooms: Vec<Option<f64>> = self
            .entries
            .iter()
            .map(|entry| entry.property.bathrooms.map(f64::from))
            .collect();

        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ComparisonEntryView {
                property_id: entry.property.id.clone(),
                title: entry.property.title.clone(),
                city: entry.property.city.clone(),
                price: entry.property.price,
                area: entry.property.area,
                bedrooms: entry.property.bedrooms,
                bathrooms: entry.property.bathrooms,
                score: entry.score.total,
                tier: entry.score.tier,
                best_price: is_best_value(prices[index], &prices, true),
                best_area: is_best_value(areas[index], &areas, false),
                best_bedrooms: is_best_value(bedrooms[index], &bedrooms, false),
                best_bathrooms: is_best_value(bathrooms[index], &bathrooms, false),
            })
            .collect();

        ComparisonView { entries }
    }
}

/// Whether `value` wins its column. Absent values are excluded from the
/// winner computation and never win; every member tying with the winner is
/// flagged.
pub fn is_best_value(value: Option<f64>, column: &[Option<f64>], lower_is_better: bool) -> bool {
    let Some(value) = value else {
        return false;
    };

    let mut best: Option<f64> = None;
    for candidate in column.iter().flatten() {
        best = Some(match best {
            None => *candidate,
            Some(current) if lower_is_better => current.min(*candidate),
            Some(current) => current.max(*candidate),
        });
    }

    best.map(|best| value == best).unwrap_or(false)
}

/// Serialized comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub entries: Vec<ComparisonEntryView>,
}

/// One column of the comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntryView {
    pub property_id: PropertyId,
    pub title: String,
    pub city: String,
    pub price: u64,
    pub area: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    pub score: u8,
    pub tier: ScoreTier,
    pub best_price: bool,
    pub best_area: bool,
    pub best_bedrooms: bool,
    pub best_bathrooms: bool,
}
