//! Legs, trip direction tags, and the trip mode-chain label.
//!
//! A trip is the maximal run of legs and intervening stage activities between
//! two non-stage activities (see [`crate::activity`]).  The types here only
//! describe single legs; trip boundaries are a property of the event stream,
//! not of any container type.

/// One atomic single-mode movement within a trip.
///
/// Mode labels are open strings because the mode universe is configuration
/// driven (`"walk"`, `"pt"`, `"drt"`, `"drt2"`, …); scoring and fare tables
/// are keyed by the same labels.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Mode label, matching the keys of the scoring/fare/randomization tables.
    pub mode:          String,
    /// Elapsed travel time in seconds.  `None` means the router could not
    /// determine a time; time-based utility and fare terms are skipped.
    pub travel_time_s: Option<f64>,
    /// Travelled distance in meters.  Zero is valid and means "no
    /// distance-based cost"; never negative.
    pub distance_m:    f64,
}

impl Leg {
    /// A leg with a known travel time.
    pub fn new(mode: impl Into<String>, travel_time_s: f64, distance_m: f64) -> Self {
        Leg {
            mode:          mode.into(),
            travel_time_s: Some(travel_time_s),
            distance_m,
        }
    }

    /// A leg whose travel time is undefined (teleported or unestimated).
    pub fn untimed(mode: impl Into<String>, distance_m: f64) -> Self {
        Leg {
            mode:          mode.into(),
            travel_time_s: None,
            distance_m,
        }
    }
}

/// Which side of the transit trip a leg sequence serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From the origin activity towards the boarding stop.
    Access,
    /// From the alighting stop towards the destination activity.
    Egress,
}

impl Direction {
    /// Human-readable label, useful for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Access => "access",
            Direction::Egress => "egress",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis label for a trip: its leg modes joined with `-`.
///
/// A walk → drt → pt chain becomes `"walk-drt-pt"`.  An empty slice yields
/// an empty label.
pub fn mode_chain_label(legs: &[Leg]) -> String {
    let mut label = String::new();
    for (i, leg) in legs.iter().enumerate() {
        if i > 0 {
            label.push('-');
        }
        label.push_str(&leg.mode);
    }
    label
}
