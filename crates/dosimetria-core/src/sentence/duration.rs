//! Rendering a month count as years, months and days.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Days per month used by the day-level fallback. Not calendar accurate.
const DAYS_PER_MONTH: f64 = 30.0;

/// Rendered when every unit is zero.
pub const ZERO_DURATION_TEXT: &str = "0 months";

/// Sentence length broken into display units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDuration {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub text: String,
}

impl fmt::Display for SentenceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Break `total_months` into years, months and (only when both are zero) days.
///
/// Months are rounded to the nearest whole month; days fill in only for
/// sentences shorter than one whole month. Negative and non-finite inputs
/// are treated as zero.
pub fn format_duration(total_months: f64) -> SentenceDuration {
    let total = if total_months.is_finite() && total_months > 0.0 {
        total_months
    } else {
        0.0
    };

    let years = (total / 12.0).floor();
    let remainder = total % 12.0;

    let (months, days) = if years == 0.0 && remainder.floor() == 0.0 {
        (0.0, (total.fract() * DAYS_PER_MONTH).round())
    } else {
        (remainder.round(), 0.0)
    };

    let (years, months, days) = (years as u64, months as u64, days as u64);
    SentenceDuration {
        years,
        months,
        days,
        text: render(years, months, days),
    }
}

fn unit(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn render(years: u64, months: u64, days: u64) -> String {
    let mut parts = Vec::with_capacity(3);
    if years > 0 {
        parts.push(unit(years, "year", "years"));
    }
    if months > 0 {
        parts.push(unit(months, "month", "months"));
    }
    if days > 0 {
        parts.push(unit(days, "day", "days"));
    }
    if parts.is_empty() {
        ZERO_DURATION_TEXT.to_string()
    } else {
        parts.join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_sentinel_text() {
        let d = format_duration(0.0);
        assert_eq!((d.years, d.months, d.days), (0, 0, 0));
        assert_eq!(d.text, ZERO_DURATION_TEXT);
    }

    #[test]
    fn thirteen_months() {
        let d = format_duration(13.0);
        assert_eq!((d.years, d.months, d.days), (1, 1, 0));
        assert_eq!(d.text, "1 year and 1 month");
    }

    #[test]
    fn half_month_falls_back_to_days() {
        let d = format_duration(0.5);
        assert_eq!((d.years, d.months, d.days), (0, 0, 15));
        assert_eq!(d.text, "15 days");
    }

    #[test]
    fn months_are_rounded() {
        let d = format_duration(77.0 * 4.0 / 3.0);
        assert_eq!((d.years, d.months, d.days), (8, 7, 0));
        assert_eq!(d.text, "8 years and 7 months");
    }

    #[test]
    fn whole_years_only() {
        assert_eq!(format_duration(24.0).text, "2 years");
        assert_eq!(format_duration(12.2).text, "1 year");
    }

    #[test]
    fn day_precision_is_dropped_once_a_month_is_reached() {
        let d = format_duration(1.5);
        assert_eq!((d.years, d.months, d.days), (0, 2, 0));
        let d = format_duration(12.5);
        assert_eq!((d.years, d.months, d.days), (1, 1, 0));
    }

    #[test]
    fn rounding_can_reach_twelve_months_without_carry() {
        let d = format_duration(23.6);
        assert_eq!((d.years, d.months, d.days), (1, 12, 0));
        assert_eq!(d.text, "1 year and 12 months");
        let d = format_duration(11.7);
        assert_eq!((d.years, d.months, d.days), (0, 12, 0));
        assert_eq!(d.text, "12 months");
    }

    #[test]
    fn invalid_inputs_render_as_zero() {
        assert_eq!(format_duration(-4.0).text, ZERO_DURATION_TEXT);
        assert_eq!(format_duration(f64::NAN).text, ZERO_DURATION_TEXT);
        assert_eq!(format_duration(f64::INFINITY).text, ZERO_DURATION_TEXT);
    }

    #[test]
    fn display_matches_text() {
        assert_eq!(format_duration(7.0).to_string(), "7 months");
    }
}
