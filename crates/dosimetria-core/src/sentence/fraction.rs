//! Legal increase/decrease fractions (majorantes and minorantes).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed fractions a statute may prescribe for phase 3.
///
/// Serialized as its label (`"0"`, `"1/6"`, `"1/3"`, `"1/2"`, `"2/3"`),
/// which is also the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fraction {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1/6")]
    OneSixth,
    #[serde(rename = "1/3")]
    OneThird,
    #[serde(rename = "1/2")]
    OneHalf,
    #[serde(rename = "2/3")]
    TwoThirds,
}

impl Fraction {
    pub const ALL: [Fraction; 5] = [
        Fraction::Zero,
        Fraction::OneSixth,
        Fraction::OneThird,
        Fraction::OneHalf,
        Fraction::TwoThirds,
    ];

    /// Numeric value of the fraction.
    pub fn value(self) -> f64 {
        match self {
            Fraction::Zero => 0.0,
            Fraction::OneSixth => 1.0 / 6.0,
            Fraction::OneThird => 1.0 / 3.0,
            Fraction::OneHalf => 1.0 / 2.0,
            Fraction::TwoThirds => 2.0 / 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Fraction::Zero => "0",
            Fraction::OneSixth => "1/6",
            Fraction::OneThird => "1/3",
            Fraction::OneHalf => "1/2",
            Fraction::TwoThirds => "2/3",
        }
    }

    pub fn is_zero(self) -> bool {
        self == Fraction::Zero
    }

    /// Parse a label, degrading anything unrecognised to [`Fraction::Zero`].
    ///
    /// A bad fraction must never block a recomputation, so this is the entry
    /// point for user- and storage-supplied labels.
    pub fn from_label(label: &str) -> Fraction {
        match label.parse() {
            Ok(fraction) => fraction,
            Err(err) => {
                tracing::debug!(%err, "treating malformed fraction as neutral");
                Fraction::Zero
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by the strict [`FromStr`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fraction '{0}' (expected one of 0, 1/6, 1/3, 1/2, 2/3)")]
pub struct ParseFractionError(pub String);

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Fraction::ALL
            .into_iter()
            .find(|f| f.label() == trimmed)
            .ok_or_else(|| ParseFractionError(s.to_string()))
    }
}
