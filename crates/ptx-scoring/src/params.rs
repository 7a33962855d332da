//! Scoring parameter value objects.
//!
//! All utility rates are expressed per second / per meter, matching the units
//! of leg travel times and distances.  Rates that make an option *less*
//! attractive are negative; the accumulation in the disutility calculator
//! adds them as-is and negates the sum at the end.

use rustc_hash::FxHashMap;

// ── Per-mode coefficients ─────────────────────────────────────────────────────

/// Linear utility coefficients for one mode.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeScoringParams {
    /// Utility per second spent traveling on this mode (usually negative).
    pub marginal_utility_of_traveling_s: f64,
    /// Utility per meter traveled (usually negative; 0 disables).
    pub marginal_utility_of_distance_m:  f64,
    /// Out-of-pocket monetary cost per meter (negative for a cost).
    pub monetary_distance_rate:          f64,
    /// Flat utility added once per leg of this mode.
    pub constant:                        f64,
}

// ── Parameter set ─────────────────────────────────────────────────────────────

/// One complete scoring-parameter set: the mode-independent baseline plus a
/// table of per-mode coefficients.
///
/// Subgroup-specific behavior is modeled as separate `ScoringParams` values
/// registered under subgroup labels in
/// [`crate::PersonScoringRegistry`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringParams {
    /// Exchange rate converting currency into utility units.
    pub marginal_utility_of_money:        f64,
    /// Utility per second of the generic activity a traveler would otherwise
    /// be performing; time spent traveling forgoes it.
    pub marginal_utility_of_performing_s: f64,
    modes: FxHashMap<String, ModeScoringParams>,
}

impl ScoringParams {
    pub fn new(marginal_utility_of_money: f64, marginal_utility_of_performing_s: f64) -> Self {
        ScoringParams {
            marginal_utility_of_money,
            marginal_utility_of_performing_s,
            modes: FxHashMap::default(),
        }
    }

    /// Register coefficients for one mode (builder style).
    pub fn with_mode(mut self, mode: impl Into<String>, params: ModeScoringParams) -> Self {
        self.modes.insert(mode.into(), params);
        self
    }

    /// Coefficients for `mode`, or `None` if the mode is not covered.
    ///
    /// The disutility calculator treats `None` as a hard configuration error;
    /// every mode a router can emit must be covered here.
    #[inline]
    pub fn mode(&self, mode: &str) -> Option<&ModeScoringParams> {
        self.modes.get(mode)
    }
}
