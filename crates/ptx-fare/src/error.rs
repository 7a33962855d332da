//! Error types for ptx-fare.

use thiserror::Error;

use crate::policy::CompensationCondition;

/// Errors from compensator construction and event-log IO.
#[derive(Debug, Error)]
pub enum FareError {
    /// The policy asks for a compensation scope no tracker implements.
    #[error("no compensator implementation for condition {0:?}")]
    UnsupportedCondition(CompensationCondition),

    #[error("event log parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, FareError>`.
pub type FareResult<T> = Result<T, FareError>;
