//! Routing error type.

use thiserror::Error;

use ptx_scoring::ScoringError;

/// Errors raised while scoring a leg sequence.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A leg uses a mode the traveler's scoring-parameter set does not
    /// cover.  There is no numeric fallback; mode coverage is a
    /// configuration obligation.
    #[error("no scoring parameters for mode {mode:?}")]
    MissingModeParams { mode: String },

    #[error("scoring parameters unavailable: {0}")]
    Scoring(#[from] ScoringError),
}

/// Alias for `Result<T, RoutingError>`.
pub type RoutingResult<T> = Result<T, RoutingError>;
