//! `ptx-routing` — disutility scoring of intermodal access/egress leg
//! sequences for the `rust_ptx` intermodal transit extensions.
//!
//! The transit router proposes candidate access and egress leg sequences per
//! boarding/alighting stop; [`AccessEgressScorer::evaluate`] condenses each
//! sequence into one disutility (lower is better) plus its total travel time,
//! so alternatives can be ranked consistently with the scoring the traveler
//! would experience in the simulation — fares, compensations, and all.
//!
//! Scorers are immutable and freely shared across routing workers; all
//! per-request mutable state lives in the caller-owned
//! [`RandomizationEpoch`] threaded into each call.
//!
//! # What lives here
//!
//! | Module            | Contents                                           |
//! |-------------------|----------------------------------------------------|
//! | [`randomization`] | `UtilityRandomization`, `RandomizationPolicies`, `RandomizationEpoch` |
//! | [`scorer`]        | `AccessEgressScorer`, `AccessEgressScore`          |
//! | [`error`]         | `RoutingError`, `RoutingResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the policy types.        |

pub mod error;
pub mod randomization;
pub mod scorer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RoutingError, RoutingResult};
pub use randomization::{RandomizationEpoch, RandomizationPolicies, UtilityRandomization};
pub use scorer::{AccessEgressScore, AccessEgressScorer};
