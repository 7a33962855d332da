//! `ptx-scoring` — behavioral scoring parameters and their per-person
//! resolution for the `rust_ptx` intermodal transit extensions.
//!
//! Parameter values are plain immutable value objects built by the hosting
//! application's configuration layer; this crate only defines their shape and
//! the person-keyed lookup tables that select between them.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`params`]   | `ModeScoringParams`, `ScoringParams`                    |
//! | [`registry`] | `PersonScoringRegistry`, `ResolvedScoring`              |
//! | [`error`]    | `ScoringError`, `ScoringResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the parameter types.     |

pub mod error;
pub mod params;
pub mod registry;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ScoringError, ScoringResult};
pub use params::{ModeScoringParams, ScoringParams};
pub use registry::{PersonScoringRegistry, ResolvedScoring};
