//! The three phases of sentence calculation.
//!
//! Each phase takes the previous phase's output. All values are in months and
//! every function assumes a non-degenerate range; the engine short-circuits
//! degenerate ranges before reaching here.

use super::circumstances::{AdjustmentCounts, JudicialCircumstances};
use super::fraction::Fraction;
use super::range::SentencingRange;

/// Number of judicial circumstances the legal interval is split across.
pub const CIRCUMSTANCE_SLICES: f64 = 8.0;

/// Each aggravating or mitigating factor is worth this fraction of the base.
pub const ADJUSTMENT_DIVISOR: f64 = 6.0;

/// Phase 1 (pena base): each negative judicial circumstance adds one eighth
/// of the statutory interval to the minimum. Never exceeds the maximum.
pub fn base_penalty(range: &SentencingRange, circumstances: &JudicialCircumstances) -> f64 {
    let unit = range.interval() / CIRCUMSTANCE_SLICES;
    let base = range.min_months + f64::from(circumstances.negative_count()) * unit;
    base.min(range.max_months)
}

/// Phase 2 (pena intermediária): each net aggravating factor moves the
/// penalty by one sixth of the base.
///
/// The result is held inside `[min, max]` no matter how many factors apply.
pub fn intermediate_penalty(
    range: &SentencingRange,
    base: f64,
    adjustments: &AdjustmentCounts,
) -> f64 {
    let unit = base / ADJUSTMENT_DIVISOR;
    let intermediate = base + adjustments.net() as f64 * unit;
    range.clamp(intermediate)
}

/// Phase 3 (pena definitiva): apply the increase, then the decrease to the
/// already-increased value. Unclamped.
pub fn final_penalty(intermediate: f64, increase: Fraction, decrease: Fraction) -> f64 {
    let mut value = intermediate;
    if !increase.is_zero() {
        value += value * increase.value();
    }
    if !decrease.is_zero() {
        value -= value * decrease.value();
    }
    value
}
