//! The compensation tracker: event handlers over the simulated day.
//!
//! # Event feed contract
//!
//! A compensator instance is driven by one sequential event feed, in
//! non-decreasing time order, totally ordered per person (cross-person
//! interleaving is unconstrained).  It must not be shared across threads: a
//! host that dispatches events in parallel must route all events of a person
//! to the same instance, in arrival order.  `reset` is only valid between
//! days/iterations, when no events are in flight — it also recovers agents
//! left mid-trip by an abnormal end of the previous day.

use rustc_hash::FxHashSet;

use ptx_core::{PersonId, is_stage_activity};

use crate::error::{FareError, FareResult};
use crate::events::{COMPENSATION_PURPOSE, CompensationSink, PersonMoneyEvent, PersonScoreEvent};
use crate::policy::{CompensationCondition, CompensationPolicy};

// ── Strategy trait ────────────────────────────────────────────────────────────

/// One compensation strategy, fed the simulator's departure and
/// activity-start events.
///
/// Implementations never fail on valid input: a person with no prior state
/// is simply a fresh person.  Strategies that accumulate over the whole day
/// settle in [`on_day_end`][Self::on_day_end]; the per-trip strategy pays as
/// it goes and keeps the no-op default.
pub trait FareCompensator {
    /// One leg departure.
    fn on_departure(
        &mut self,
        time_s: f64,
        person: PersonId,
        mode:   &str,
        sink:   &mut dyn CompensationSink,
    );

    /// One activity start.  Non-stage activities end the person's trip.
    fn on_activity_start(
        &mut self,
        time_s:        f64,
        person:        PersonId,
        activity_type: &str,
        sink:          &mut dyn CompensationSink,
    );

    /// End of the simulated day, before `reset`.
    fn on_day_end(&mut self, _time_s: f64, _sink: &mut dyn CompensationSink) {}

    /// Drop all per-person state, ready for the next day/iteration.
    fn reset(&mut self);
}

/// Build the tracker for `policy`, dispatching on its condition.
///
/// Fails for conditions without a tracker implementation (currently the
/// day-scope condition, whose aggregation rule is undefined here).
pub fn build_compensator(policy: CompensationPolicy) -> FareResult<Box<dyn FareCompensator>> {
    match policy.condition {
        CompensationCondition::PtModeUsedInSameTrip => Ok(Box::new(PerTripCompensator::new(policy))),
        CompensationCondition::PtModeUsedAnywhereInTheDay => {
            Err(FareError::UnsupportedCondition(policy.condition))
        }
    }
}

// ── Per-trip strategy ─────────────────────────────────────────────────────────

/// Pays the flat compensation whenever a reference-mode departure and a
/// companion-mode departure fall inside one trip.
///
/// Per-person state is two membership sets.  At most one pending companion
/// departure is tracked per trip (set semantics; re-marking is a no-op), so
/// several companion legs before the reference leg settle as one payment —
/// a known simplification of the tracking model.  Companion legs *after*
/// the reference leg settle immediately, each on its own.
pub struct PerTripCompensator {
    policy:            CompensationPolicy,
    /// Departed on a reference mode during the current trip.
    on_reference_trip: FxHashSet<PersonId>,
    /// Departed on a companion mode this trip, awaiting a reference leg.
    pending_companion: FxHashSet<PersonId>,
}

impl PerTripCompensator {
    pub fn new(policy: CompensationPolicy) -> Self {
        PerTripCompensator {
            policy,
            on_reference_trip: FxHashSet::default(),
            pending_companion: FxHashSet::default(),
        }
    }

    /// Emit exactly one money event and one score event, flat amounts.
    fn pay(&self, time_s: f64, person: PersonId, sink: &mut dyn CompensationSink) {
        sink.on_money(PersonMoneyEvent {
            time_s,
            person,
            amount: self.policy.money_per_trip,
            purpose: COMPENSATION_PURPOSE.to_owned(),
        });
        sink.on_score(PersonScoreEvent {
            time_s,
            person,
            amount: self.policy.score_per_trip,
            purpose: COMPENSATION_PURPOSE.to_owned(),
        });
    }
}

impl FareCompensator for PerTripCompensator {
    fn on_departure(
        &mut self,
        time_s: f64,
        person: PersonId,
        mode:   &str,
        sink:   &mut dyn CompensationSink,
    ) {
        // Both branches run: the sets are independent memberships, and a mode
        // may (by misconfiguration) be in both.
        if self.policy.is_reference(mode) {
            self.on_reference_trip.insert(person);

            if self.pending_companion.remove(&person) {
                // Companion leg came earlier in this trip; settle now.
                self.pay(time_s, person, sink);
            }
        }
        if self.policy.is_companion(mode) {
            if self.on_reference_trip.contains(&person) {
                // Reference leg already seen this trip; settle immediately.
                self.pay(time_s, person, sink);
            } else {
                // Settle later, if a reference leg follows in this trip.
                self.pending_companion.insert(person);
            }
        }
    }

    fn on_activity_start(
        &mut self,
        _time_s:       f64,
        person:        PersonId,
        activity_type: &str,
        _sink:         &mut dyn CompensationSink,
    ) {
        if !is_stage_activity(activity_type) {
            // Trip finished; a dangling pending mark is forfeited.
            self.on_reference_trip.remove(&person);
            self.pending_companion.remove(&person);
        }
    }

    fn reset(&mut self) {
        self.on_reference_trip.clear();
        self.pending_companion.clear();
    }
}
