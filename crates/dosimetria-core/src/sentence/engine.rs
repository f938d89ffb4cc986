//! Entry point that runs all three phases.

use serde::{Deserialize, Serialize};

use super::circumstances::{AdjustmentCounts, JudicialCircumstances};
use super::fraction::Fraction;
use super::phases::{base_penalty, final_penalty, intermediate_penalty};
use super::range::{PenaltyTerm, SentencingRange};

/// Output of every phase, in months.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    pub base_months: f64,
    pub intermediate_months: f64,
    pub final_months: f64,
}

impl CalculationResult {
    /// The result for a degenerate range: nothing computed.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Run phases 1 through 3.
///
/// Pure: identical inputs always produce identical outputs. A degenerate
/// range yields [`CalculationResult::zero`] instead of an error.
pub fn compute_sentence(
    range: &SentencingRange,
    circumstances: &JudicialCircumstances,
    adjustments: &AdjustmentCounts,
    increase: Fraction,
    decrease: Fraction,
) -> CalculationResult {
    if range.is_degenerate() {
        tracing::debug!(
            min = range.min_months,
            max = range.max_months,
            "degenerate range, skipping calculation"
        );
        return CalculationResult::zero();
    }

    let base_months = base_penalty(range, circumstances);
    let intermediate_months = intermediate_penalty(range, base_months, adjustments);
    let final_months = final_penalty(intermediate_months, increase, decrease);

    tracing::debug!(
        base_months,
        intermediate_months,
        final_months,
        "sentence computed"
    );

    CalculationResult {
        base_months,
        intermediate_months,
        final_months,
    }
}

/// Every field the engine reads, in the shape they are typed and persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentenceInputs {
    pub min_years: i64,
    pub min_months: i64,
    pub max_years: i64,
    pub max_months: i64,
    #[serde(default)]
    pub circumstances: JudicialCircumstances,
    #[serde(rename = "agravantes", default)]
    pub aggravating: u32,
    #[serde(rename = "atenuantes", default)]
    pub mitigating: u32,
    #[serde(default)]
    pub increase_fraction: Fraction,
    #[serde(default)]
    pub decrease_fraction: Fraction,
}

impl SentenceInputs {
    pub fn min_term(&self) -> PenaltyTerm {
        PenaltyTerm::new(self.min_years, self.min_months)
    }

    pub fn max_term(&self) -> PenaltyTerm {
        PenaltyTerm::new(self.max_years, self.max_months)
    }

    pub fn range(&self) -> SentencingRange {
        SentencingRange::normalize(self.min_term(), self.max_term())
    }

    pub fn adjustments(&self) -> AdjustmentCounts {
        AdjustmentCounts::new(self.aggravating, self.mitigating)
    }

    /// Recompute from scratch; call after every input change.
    pub fn compute(&self) -> CalculationResult {
        compute_sentence(
            &self.range(),
            &self.circumstances,
            &self.adjustments(),
            self.increase_fraction,
            self.decrease_fraction,
        )
    }
}
