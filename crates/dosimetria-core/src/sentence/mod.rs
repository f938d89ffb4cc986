//! Three-phase sentence calculation (dosimetria trifásica).
//!
//! The pipeline is a pure function of its inputs:
//!
//! 1. [`SentencingRange::normalize`] turns the statutory bounds into months.
//! 2. [`base_penalty`] spreads the interval across negative judicial circumstances.
//! 3. [`intermediate_penalty`] applies agravantes/atenuantes, clamped to the range.
//! 4. [`final_penalty`] applies majorantes/minorantes, unclamped.
//! 5. [`format_duration`] renders the result for display.

mod circumstances;
mod duration;
mod engine;
mod fraction;
mod phases;
mod range;

pub use circumstances::{AdjustmentCounts, Circumstance, JudicialCircumstances};
pub use duration::{format_duration, SentenceDuration, ZERO_DURATION_TEXT};
pub use engine::{compute_sentence, CalculationResult, SentenceInputs};
pub use fraction::{Fraction, ParseFractionError};
pub use phases::{base_penalty, final_penalty, intermediate_penalty};
pub use range::{PenaltyTerm, SentencingRange};
