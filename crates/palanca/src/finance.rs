//! Fixed-rate financing quotes for the mortgage simulator.

use serde::{Deserialize, Serialize};

/// Loan durations offered by the financing form, in years.
pub const TERM_YEARS_CHOICES: [u32; 5] = [15, 20, 25, 30, 35];

/// Loan terms captured from the financing form.
///
/// The form keeps the down payment within 5-50% and the rate within 5-25%;
/// the calculator itself stays total over any positive numbers and simply
/// reflects whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub property_value: f64,
    pub down_payment_percent: f64,
    pub annual_interest_rate_percent: f64,
    pub term_years: u32,
}

/// Payment schedule summary derived from a set of loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingQuote {
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Baseline income used only to classify affordability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceConfig {
    pub reference_monthly_income: f64,
}

/// Coarse guidance on how a monthly payment relates to the reference income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityTier {
    Comfortable,
    Moderate,
    Strained,
}

impl AffordabilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            AffordabilityTier::Comfortable => "comfortable",
            AffordabilityTier::Moderate => "moderate",
            AffordabilityTier::Strained => "strained",
        }
    }
}

/// Affordability classification attached to a quote for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Affordability {
    pub income_ratio: f64,
    pub tier: AffordabilityTier,
}

/// Rejections surfaced by [`FinancingCalculator::quote`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("loan term must cover at least one monthly payment")]
    ZeroTerm,
}

/// Stateless calculator applying the standard annuity formula.
pub struct FinancingCalculator {
    config: FinanceConfig,
}

impl FinancingCalculator {
    pub fn new(config: FinanceConfig) -> Self {
        Self { config }
    }

    pub fn quote(&self, terms: &LoanTerms) -> Result<FinancingQuote, QuoteError> {
        if terms.term_years == 0 {
            return Err(QuoteError::ZeroTerm);
        }

        let down_payment = terms.property_value * terms.down_payment_percent / 100.0;
        let loan_amount = terms.property_value - down_payment;
        let monthly_rate = terms.annual_interest_rate_percent / 100.0 / 12.0;
        let payments = f64::from(terms.term_years * 12);

        if monthly_rate == 0.0 {
            let monthly_payment = loan_amount / payments;
            return Ok(FinancingQuote {
                down_payment,
                loan_amount,
                monthly_payment,
                total_payment: monthly_payment * payments + down_payment,
                total_interest: 0.0,
            });
        }

        let growth = (1.0 + monthly_rate).powf(payments);
        let monthly_payment = loan_amount * (monthly_rate * growth) / (growth - 1.0);
        let total_payment = monthly_payment * payments + down_payment;
        let total_interest = total_payment - terms.property_value;

        Ok(FinancingQuote {
            down_payment,
            loan_amount,
            monthly_payment,
            total_payment,
            total_interest,
        })
    }

    pub fn affordability(&self, monthly_payment: f64) -> Affordability {
        let income_ratio = monthly_payment / self.config.reference_monthly_income;
        let tier = if income_ratio <= 0.30 {
            AffordabilityTier::Comfortable
        } else if income_ratio <= 0.40 {
            AffordabilityTier::Moderate
        } else {
            AffordabilityTier::Strained
        };

        Affordability { income_ratio, tier }
    }
}
