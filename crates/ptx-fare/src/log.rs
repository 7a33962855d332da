//! Travel-event log IO and replay.
//!
//! # Input CSV format
//!
//! One row per travel event, in non-decreasing `time_s` order:
//!
//! ```csv
//! time_s,person,kind,value
//! 100,1,departure,drt
//! 400,1,activity_start,drt interaction
//! 450,1,departure,pt
//! 2000,1,activity_start,work
//! ```
//!
//! **`kind`/`value`** columns:
//!
//! | `kind`           | `value` holds        |
//! |------------------|----------------------|
//! | `departure`      | the leg's mode label |
//! | `activity_start` | the activity type    |
//!
//! # Output CSV format
//!
//! [`CsvCompensationWriter`] produces one `compensation_events.csv`-style
//! file with columns `time_s,person,kind,amount,purpose`, where `kind` is
//! `money` or `score`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Writer;
use serde::Deserialize;

use ptx_core::PersonId;

use crate::compensator::FareCompensator;
use crate::error::{FareError, FareResult};
use crate::events::{CompensationSink, PersonMoneyEvent, PersonScoreEvent};

// ── Event type ────────────────────────────────────────────────────────────────

/// One record of the simulator's travel-event feed.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelEvent {
    Departure {
        time_s: f64,
        person: PersonId,
        mode:   String,
    },
    ActivityStart {
        time_s:        f64,
        person:        PersonId,
        activity_type: String,
    },
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    time_s: f64,
    person: u32,
    kind:   String,
    value:  String,
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Load a travel-event log from a CSV file.
pub fn read_travel_events_csv(path: &Path) -> FareResult<Vec<TravelEvent>> {
    let file = File::open(path).map_err(FareError::Io)?;
    read_travel_events_reader(file)
}

/// Like [`read_travel_events_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn read_travel_events_reader<R: Read>(reader: R) -> FareResult<Vec<TravelEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();

    for result in csv_reader.deserialize::<EventRecord>() {
        let row = result.map_err(|e| FareError::Parse(e.to_string()))?;
        let person = PersonId(row.person);
        match row.kind.as_str() {
            "departure" => events.push(TravelEvent::Departure {
                time_s: row.time_s,
                person,
                mode: row.value,
            }),
            "activity_start" => events.push(TravelEvent::ActivityStart {
                time_s: row.time_s,
                person,
                activity_type: row.value,
            }),
            other => {
                return Err(FareError::Parse(format!(
                    "invalid event kind {other:?}: expected \"departure\" or \"activity_start\""
                )));
            }
        }
    }

    Ok(events)
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// Drive `compensator` with an in-order event slice.
///
/// Replaying the same slice after a `reset` reproduces the same emissions;
/// tests and restarts rely on that.
pub fn replay(
    events:      &[TravelEvent],
    compensator: &mut dyn FareCompensator,
    sink:        &mut dyn CompensationSink,
) {
    for event in events {
        match event {
            TravelEvent::Departure { time_s, person, mode } => {
                compensator.on_departure(*time_s, *person, mode, sink);
            }
            TravelEvent::ActivityStart { time_s, person, activity_type } => {
                compensator.on_activity_start(*time_s, *person, activity_type, sink);
            }
        }
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

/// A [`CompensationSink`] that writes every emission to one CSV file.
///
/// Sink methods are infallible, so write errors are stashed internally; the
/// first one surfaces from [`finish`][Self::finish].
pub struct CsvCompensationWriter {
    events:     Writer<File>,
    last_error: Option<FareError>,
    finished:   bool,
}

impl CsvCompensationWriter {
    /// Open (or create) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> FareResult<Self> {
        let mut events = Writer::from_path(path)?;
        events.write_record(["time_s", "person", "kind", "amount", "purpose"])?;

        Ok(CsvCompensationWriter {
            events,
            last_error: None,
            finished: false,
        })
    }

    /// Flush the file and report the first stashed write error, if any.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> FareResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.events.flush()?;
        Ok(())
    }

    fn write_row(
        &mut self,
        time_s:  f64,
        person:  PersonId,
        kind:    &str,
        amount:  f64,
        purpose: &str,
    ) -> FareResult<()> {
        self.events.write_record(&[
            time_s.to_string(),
            person.0.to_string(),
            kind.to_string(),
            amount.to_string(),
            purpose.to_string(),
        ])?;
        Ok(())
    }

    fn store_err(&mut self, result: FareResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl CompensationSink for CsvCompensationWriter {
    fn on_money(&mut self, event: PersonMoneyEvent) {
        let result = self.write_row(event.time_s, event.person, "money", event.amount, &event.purpose);
        self.store_err(result);
    }

    fn on_score(&mut self, event: PersonScoreEvent) {
        let result = self.write_row(event.time_s, event.person, "score", event.amount, &event.purpose);
        self.store_err(result);
    }
}
