//! Desirability scoring and side-by-side comparison for catalog listings.

mod comparison;
mod rules;

#[cfg(test)]
mod tests;

pub use comparison::{
    is_best_value, ComparisonEntry, ComparisonEntryView, ComparisonError, ComparisonSet,
    ComparisonView,
};

use serde::{Deserialize, Serialize};

use crate::listings::domain::Property;

/// Market tuning for the location sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub primary_city: String,
    pub secondary_city: String,
}

/// Stateless engine reducing a listing to a 0-100 desirability score.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, property: &Property) -> ScoreBreakdown {
        let (components, total) = rules::score_listing(property, &self.config);

        ScoreBreakdown {
            total,
            tier: ScoreTier::for_total(total),
            components,
        }
    }
}

/// Discrete contribution to a listing score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Factors contributing to a listing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Price,
    Area,
    Bedrooms,
    Location,
    Features,
}

/// Scoring output with the capped total and its per-factor trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u8,
    pub tier: ScoreTier,
    pub components: Vec<ScoreComponent>,
}

/// Coarse quality band used for color-coding scores in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Poor,
}

impl ScoreTier {
    pub const fn for_total(total: u8) -> Self {
        if total >= 80 {
            ScoreTier::Excellent
        } else if total >= 60 {
            ScoreTier::Good
        } else {
            ScoreTier::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Poor => "poor",
        }
    }
}
