//! Fare parameter value objects.
//!
//! Fares are per-mode and linear in distance and travel time, with a flat
//! base amount and a minimum per trip.  Modes absent from the schedule are
//! fare-free; that is a normal configuration (walk, bike), not an error.

use rustc_hash::FxHashMap;

// ── Per-mode fare ─────────────────────────────────────────────────────────────

/// Fare structure of one fare-bearing mode (typically the on-demand feeder).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareParams {
    /// Flat amount charged per trip.
    pub base_fare:              f64,
    /// Amount per meter traveled.
    pub distance_fare_m:        f64,
    /// Amount per hour of travel time.
    pub time_fare_h:            f64,
    /// Lower bound applied after summing the components.
    pub min_fare_per_trip:      f64,
    /// Flat amount charged once per day of use.  Billed by the operator's
    /// daily accounting, never as part of a single leg's fare.
    pub daily_subscription_fee: f64,
}

impl FareParams {
    /// Fare for one leg: distance component (skipped at zero distance) plus
    /// time component (skipped when travel time is undefined) plus the base
    /// fare, floored at the per-trip minimum.
    pub fn leg_fare(&self, travel_time_s: Option<f64>, distance_m: f64) -> f64 {
        let mut fare = 0.0;
        if distance_m != 0.0 {
            fare += self.distance_fare_m * distance_m;
        }
        if let Some(t) = travel_time_s {
            fare += self.time_fare_h * t / 3600.0;
        }
        fare += self.base_fare;
        fare.max(self.min_fare_per_trip)
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Fare parameters per mode.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareSchedule {
    by_mode: FxHashMap<String, FareParams>,
}

impl FareSchedule {
    pub fn new() -> Self {
        FareSchedule::default()
    }

    /// Register the fare structure of one mode (builder style).
    pub fn with_mode(mut self, mode: impl Into<String>, params: FareParams) -> Self {
        self.by_mode.insert(mode.into(), params);
        self
    }

    /// Fare parameters for `mode`; `None` means the mode is fare-free.
    #[inline]
    pub fn for_mode(&self, mode: &str) -> Option<&FareParams> {
        self.by_mode.get(mode)
    }
}
