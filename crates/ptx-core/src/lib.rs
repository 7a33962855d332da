//! `ptx-core` — foundational types for the `rust_ptx` intermodal transit
//! extensions.
//!
//! This crate is a dependency of every other `ptx-*` crate.  It intentionally
//! has no `ptx-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `PersonId`                                              |
//! | [`leg`]      | `Leg`, `Direction`, `mode_chain_label`                  |
//! | [`activity`] | Stage-activity classification (`is_stage_activity`)     |
//! | [`rng`]      | `ScoringRng` (deterministic perturbation sampling)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod activity;
pub mod ids;
pub mod leg;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::{STAGE_ACTIVITY_SUFFIX, is_stage_activity};
pub use ids::PersonId;
pub use leg::{Direction, Leg, mode_chain_label};
pub use rng::ScoringRng;
