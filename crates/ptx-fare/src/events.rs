//! Compensation events and the sink they are emitted into.
//!
//! The hosting simulator owns the real event pipeline; this crate only needs
//! a narrow outlet for the two event kinds the compensator produces.  Sinks
//! are infallible from the compensator's perspective — fallible sinks (like
//! the CSV writer in [`crate::log`]) stash their first error internally.

use ptx_core::PersonId;

/// Purpose tag carried by every compensation event, shared with the hosting
/// system's money-event accounting.
pub const COMPENSATION_PURPOSE: &str = "intermodalTripFareCompensation";

// ── Events ────────────────────────────────────────────────────────────────────

/// A monetary transfer to one person (positive = refund).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonMoneyEvent {
    pub time_s:  f64,
    pub person:  PersonId,
    pub amount:  f64,
    pub purpose: String,
}

/// A direct utility grant to one person, outside the monetary exchange rate.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonScoreEvent {
    pub time_s:  f64,
    pub person:  PersonId,
    pub amount:  f64,
    pub purpose: String,
}

// ── Sink ──────────────────────────────────────────────────────────────────────

/// Receiver for emitted compensation events.
pub trait CompensationSink {
    fn on_money(&mut self, event: PersonMoneyEvent);
    fn on_score(&mut self, event: PersonScoreEvent);
}

/// A [`CompensationSink`] that discards everything.  Use when driving a
/// compensator whose emissions are irrelevant (warm-up days, benchmarks).
pub struct NoopSink;

impl CompensationSink for NoopSink {
    fn on_money(&mut self, _event: PersonMoneyEvent) {}
    fn on_score(&mut self, _event: PersonScoreEvent) {}
}

/// A [`CompensationSink`] that collects everything, for assertions and
/// summary reporting.
#[derive(Default)]
pub struct RecordingSink {
    pub money: Vec<PersonMoneyEvent>,
    pub score: Vec<PersonScoreEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// Sum of monetary amounts paid to `person`.
    pub fn money_total_for(&self, person: PersonId) -> f64 {
        self.money
            .iter()
            .filter(|e| e.person == person)
            .map(|e| e.amount)
            .sum()
    }

    /// Number of money events paid to `person`.
    pub fn payments_to(&self, person: PersonId) -> usize {
        self.money.iter().filter(|e| e.person == person).count()
    }
}

impl CompensationSink for RecordingSink {
    fn on_money(&mut self, event: PersonMoneyEvent) {
        self.money.push(event);
    }

    fn on_score(&mut self, event: PersonScoreEvent) {
        self.score.push(event);
    }
}
