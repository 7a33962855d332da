//! Compensation policy value objects.

use rustc_hash::FxHashSet;

// ── Condition ─────────────────────────────────────────────────────────────────

/// When a reference/companion mode combination qualifies for compensation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompensationCondition {
    /// Both modes must be used within the bounds of a single trip.
    PtModeUsedInSameTrip,
    /// Any reference-mode use during the day qualifies every companion-mode
    /// trip.  Recognized in configurations, but no tracker implements it;
    /// [`crate::build_compensator`] rejects policies carrying it.
    PtModeUsedAnywhereInTheDay,
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// One compensation rule: which mode pairing qualifies, and the flat amounts
/// paid per qualifying trip.
///
/// The reference set typically holds the scheduled transit modes (`"pt"`),
/// the companion set the subsidized on-demand feeder modes (`"drt"`, …).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompensationPolicy {
    pub reference_modes: FxHashSet<String>,
    pub companion_modes: FxHashSet<String>,
    /// Monetary amount paid per qualifying trip (positive = refund).
    pub money_per_trip:  f64,
    /// Score amount granted per qualifying trip.
    pub score_per_trip:  f64,
    pub condition:       CompensationCondition,
}

impl CompensationPolicy {
    /// A same-trip policy with empty mode sets; fill them with
    /// [`with_reference_mode`][Self::with_reference_mode] and
    /// [`with_companion_mode`][Self::with_companion_mode].
    pub fn new(money_per_trip: f64, score_per_trip: f64) -> Self {
        CompensationPolicy {
            reference_modes: FxHashSet::default(),
            companion_modes: FxHashSet::default(),
            money_per_trip,
            score_per_trip,
            condition: CompensationCondition::PtModeUsedInSameTrip,
        }
    }

    pub fn with_reference_mode(mut self, mode: impl Into<String>) -> Self {
        self.reference_modes.insert(mode.into());
        self
    }

    pub fn with_companion_mode(mut self, mode: impl Into<String>) -> Self {
        self.companion_modes.insert(mode.into());
        self
    }

    pub fn with_condition(mut self, condition: CompensationCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Membership tests are independent: a (misconfigured) mode may be in
    /// both sets, and event handling evaluates both branches.
    #[inline]
    pub fn is_reference(&self, mode: &str) -> bool {
        self.reference_modes.contains(mode)
    }

    #[inline]
    pub fn is_companion(&self, mode: &str) -> bool {
        self.companion_modes.contains(mode)
    }
}
