//! Utility randomization: per-mode widths and the per-request epoch.
//!
//! Randomized utility offsets spread otherwise-identical alternatives apart,
//! so repeated routing does not collapse onto one stop.  Two flavors exist
//! per mode: an offset resampled on every evaluation, and a "frozen" offset
//! sampled once per (person, direction, mode) and reused while the router
//! scans stops for that person and direction — without it, the stop scan
//! would re-roll the mode preference per stop and pick the luckiest stop
//! instead of a consistent mode taste.
//!
//! The frozen state lives in a [`RandomizationEpoch`] owned by the caller
//! and passed into every [`evaluate`][crate::AccessEgressScorer::evaluate]
//! call.  One epoch per worker (or per routing request) keeps evaluations of
//! different travelers fully independent; no ordering between travelers is
//! assumed anywhere.

use rustc_hash::FxHashMap;

use ptx_core::{Direction, PersonId, ScoringRng};

// ── Per-mode widths ───────────────────────────────────────────────────────────

/// Additive perturbation widths for one mode.  Offsets are uniform over
/// `[-width / 2, +width / 2)`; zero disables the flavor.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtilityRandomization {
    /// Width of the offset resampled on every evaluation.
    pub additive_width:        f64,
    /// Width of the offset frozen per (person, direction, mode).
    pub additive_width_frozen: f64,
}

/// Randomization widths per mode; modes absent here are never perturbed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomizationPolicies {
    by_mode: FxHashMap<String, UtilityRandomization>,
}

impl RandomizationPolicies {
    pub fn new() -> Self {
        RandomizationPolicies::default()
    }

    /// Register widths for one mode (builder style).
    pub fn with_mode(mut self, mode: impl Into<String>, widths: UtilityRandomization) -> Self {
        self.by_mode.insert(mode.into(), widths);
        self
    }

    #[inline]
    pub fn for_mode(&self, mode: &str) -> Option<&UtilityRandomization> {
        self.by_mode.get(mode)
    }
}

// ── Epoch ─────────────────────────────────────────────────────────────────────

/// Caller-owned randomization state for one stream of evaluations.
///
/// Create one per routing worker (or per outer routing request) and pass it
/// to every `evaluate` call made there.  Frozen offsets persist while the
/// incoming (person, direction) pair stays the same and are dropped the
/// moment it changes; interleaving travelers within one epoch is therefore
/// safe, it merely resamples the frozen offsets on each switch.
pub struct RandomizationEpoch {
    key:    Option<(PersonId, Direction)>,
    frozen: FxHashMap<String, f64>,
    rng:    ScoringRng,
}

impl RandomizationEpoch {
    /// An epoch with its own deterministic RNG.
    pub fn new(seed: u64) -> Self {
        RandomizationEpoch::from_rng(ScoringRng::new(seed))
    }

    /// An epoch seeded for one person, decorrelated from other persons'
    /// epochs derived from the same global seed.
    pub fn for_person(global_seed: u64, person: PersonId) -> Self {
        RandomizationEpoch::from_rng(ScoringRng::for_person(global_seed, person))
    }

    pub fn from_rng(rng: ScoringRng) -> Self {
        RandomizationEpoch {
            key: None,
            frozen: FxHashMap::default(),
            rng,
        }
    }

    /// Point the epoch at a (person, direction) pair; a changed pair drops
    /// all frozen offsets.
    pub(crate) fn rekey(&mut self, person: PersonId, direction: Direction) {
        if self.key != Some((person, direction)) {
            self.frozen.clear();
            self.key = Some((person, direction));
        }
    }

    /// Fresh offset, resampled on every call.
    pub(crate) fn unfrozen_offset(&mut self, width: f64) -> f64 {
        self.rng.uniform_offset(width)
    }

    /// Offset for `mode`, sampled lazily once per epoch key and then reused.
    pub(crate) fn frozen_offset(&mut self, mode: &str, width: f64) -> f64 {
        if let Some(offset) = self.frozen.get(mode) {
            return *offset;
        }
        let offset = self.rng.uniform_offset(width);
        self.frozen.insert(mode.to_owned(), offset);
        offset
    }
}
