//! Core error types for the aggregation engine.
//!
//! The engine has exactly two failure modes, both caller-must-fix-input and
//! never transient: a custom period whose start falls after its end, and a
//! period spec that cannot resolve to a non-empty range. Every aggregate
//! computation over well-formed input is total; absence of data degrades to
//! zero-valued summaries instead of erroring.

use chrono::NaiveDate;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A custom period's start date falls after its end date.
    #[error("Invalid period range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A period spec the resolver cannot produce a non-empty range for.
    #[error("Invalid period spec: {0}")]
    InvalidPeriodSpec(String),
}
