//! `ptx-fare` — fare schedules and intermodal trip compensation for the
//! `rust_ptx` intermodal transit extensions.
//!
//! The centerpiece is the [`FareCompensator`] strategy: a handler fed the
//! hosting simulator's chronological departure / activity-start event stream,
//! paying a flat money + score compensation whenever a traveler combines a
//! reference mode (scheduled transit) with a companion mode (an on-demand
//! feeder) inside one trip.
//!
//! # What lives here
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`params`]      | `FareParams`, `FareSchedule`                         |
//! | [`policy`]      | `CompensationPolicy`, `CompensationCondition`        |
//! | [`events`]      | `PersonMoneyEvent`, `PersonScoreEvent`, sinks        |
//! | [`compensator`] | `FareCompensator`, `PerTripCompensator`, factory     |
//! | [`log`]         | `TravelEvent`, CSV event-log reader, replay, writer  |
//! | [`error`]       | `FareError`, `FareResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to policy/parameter types.  |

pub mod compensator;
pub mod error;
pub mod events;
pub mod log;
pub mod params;
pub mod policy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compensator::{FareCompensator, PerTripCompensator, build_compensator};
pub use error::{FareError, FareResult};
pub use events::{
    COMPENSATION_PURPOSE, CompensationSink, NoopSink, PersonMoneyEvent, PersonScoreEvent,
    RecordingSink,
};
pub use log::{
    CsvCompensationWriter, TravelEvent, read_travel_events_csv, read_travel_events_reader, replay,
};
pub use params::{FareParams, FareSchedule};
pub use policy::{CompensationCondition, CompensationPolicy};
