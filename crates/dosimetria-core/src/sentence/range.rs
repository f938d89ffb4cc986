//! Statutory penalty range, normalized to months.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A penalty bound as typed by the user: years plus months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PenaltyTerm {
    pub years: i64,
    pub months: i64,
}

impl PenaltyTerm {
    pub fn new(years: i64, months: i64) -> Self {
        Self { years, months }
    }

    /// Total months, with negative components clamped to zero.
    pub fn total_months(&self) -> i64 {
        self.years.max(0).saturating_mul(12).saturating_add(self.months.max(0))
    }
}

/// Statutory range in months.
///
/// Only meaningful when `max_months > min_months`; otherwise the range is
/// degenerate and every phase yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentencingRange {
    pub min_months: f64,
    pub max_months: f64,
}

impl SentencingRange {
    pub fn new(min_months: f64, max_months: f64) -> Self {
        Self {
            min_months,
            max_months,
        }
    }

    /// Build a range from two (years, months) bounds. Never fails.
    pub fn normalize(min: PenaltyTerm, max: PenaltyTerm) -> Self {
        Self::new(min.total_months() as f64, max.total_months() as f64)
    }

    pub fn is_degenerate(&self) -> bool {
        // NaN bounds compare as unordered and count as degenerate.
        !matches!(
            self.max_months.partial_cmp(&self.min_months),
            Some(Ordering::Greater)
        )
    }

    /// Width of the statutory interval.
    pub fn interval(&self) -> f64 {
        self.max_months - self.min_months
    }

    pub fn clamp(&self, months: f64) -> f64 {
        months.max(self.min_months).min(self.max_months)
    }
}
