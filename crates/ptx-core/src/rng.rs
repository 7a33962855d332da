//! Deterministic RNG wrapper for utility perturbation sampling.
//!
//! # Determinism strategy
//!
//! Every randomization epoch owns an independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive person IDs uniformly across the seed space.
//! This means:
//!
//! - Epochs never share RNG state (no contention, no ordering dependency
//!   between travelers evaluated on different workers).
//! - Runs are reproducible from the global seed alone, independent of the
//!   order in which routing requests arrive.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG behind utility perturbations.
///
/// The type is `!Sync` to prevent accidental sharing across threads — each
/// worker holds its own instance inside its randomization epoch.
pub struct ScoringRng(SmallRng);

impl ScoringRng {
    /// Seed directly, for single-feed or test use.
    pub fn new(seed: u64) -> Self {
        ScoringRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and a person ID.
    pub fn for_person(global_seed: u64, person: PersonId) -> Self {
        let seed = global_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ScoringRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One additive utility perturbation, uniform over
    /// `[-width / 2, +width / 2)`.  A zero `width` always yields `0.0`.
    #[inline]
    pub fn uniform_offset(&mut self, width: f64) -> f64 {
        (self.0.r#gen::<f64>() - 0.5) * width
    }
}
