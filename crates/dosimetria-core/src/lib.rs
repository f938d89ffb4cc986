//! # Dosimetria Core Library
//!
//! This library implements the three-phase criminal sentence calculation
//! (dosimetria trifásica) used by the Dosimetria study tools. The engine is a
//! pure function of its inputs; the CLI and any other front end simply call
//! it again after every input change.
//!
//! ## Architecture
//!
//! - **Sentence engine**: range normalization, base/intermediate/final phases
//!   and duration formatting. Never fails; degenerate input yields zero.
//! - **Storage**: a narrow [`SessionRepository`] trait for saved calculations,
//!   with an in-memory implementation and an SQLite one, plus TOML-based
//!   configuration.
//!
//! ## Key Components
//!
//! - [`compute_sentence`]: runs phases 1 to 3
//! - [`format_duration`]: renders months as years/months/days
//! - [`SessionRepository`]: save/list/get/delete/load of saved sessions
//! - [`Config`]: Application configuration management

pub mod error;
pub mod sentence;
pub mod storage;

pub use error::{ConfigError, CoreError, DatabaseError, SessionError, ValidationError};
pub use sentence::{
    compute_sentence, format_duration, AdjustmentCounts, CalculationResult, Circumstance,
    Fraction, JudicialCircumstances, PenaltyTerm, SentenceDuration, SentenceInputs,
    SentencingRange,
};
pub use storage::{
    Config, InMemorySessionRepository, SentencingSession, SentencingSessionInput, SessionDb,
    SessionRepository,
};
