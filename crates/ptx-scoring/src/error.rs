//! Scoring error type.

use thiserror::Error;

use ptx_core::PersonId;

/// Errors raised while resolving scoring parameters.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A person is assigned to a subgroup for which no parameter set was
    /// registered.  This is a configuration gap, not a recoverable state.
    #[error("person {person} is in subgroup {label:?} but no scoring parameters are registered for it")]
    UnknownSubgroup { person: PersonId, label: String },
}

/// Shorthand result type for scoring-parameter resolution.
pub type ScoringResult<T> = Result<T, ScoringError>;
