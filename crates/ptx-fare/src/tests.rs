//! Unit tests for fares, compensation policies, the per-trip compensator,
//! and event-log IO.

#[cfg(test)]
mod policies {
    use crate::{CompensationCondition, CompensationPolicy};

    #[test]
    fn builder_fills_mode_sets() {
        let policy = CompensationPolicy::new(1.0, 2.0)
            .with_reference_mode("pt")
            .with_companion_mode("drt")
            .with_companion_mode("drt2");

        assert!(policy.is_reference("pt"));
        assert!(!policy.is_reference("drt"));
        assert!(policy.is_companion("drt"));
        assert!(policy.is_companion("drt2"));
        assert!(!policy.is_companion("walk"));
    }

    #[test]
    fn default_condition_is_same_trip() {
        let policy = CompensationPolicy::new(1.0, 2.0);
        assert_eq!(policy.condition, CompensationCondition::PtModeUsedInSameTrip);
    }
}

#[cfg(test)]
mod fares {
    use crate::{FareParams, FareSchedule};

    fn drt_fare() -> FareParams {
        FareParams {
            base_fare:              1.0,
            distance_fare_m:        0.0002,
            time_fare_h:            1.08,
            min_fare_per_trip:      2.0,
            daily_subscription_fee: 10.0,
        }
    }

    #[test]
    fn fare_sums_distance_time_and_base() {
        // 0.0002 * 5000 + 1.08 * 600 / 3600 + 1.0 = 2.18, above the minimum.
        let fare = drt_fare().leg_fare(Some(600.0), 5000.0);
        assert!((fare - 2.18).abs() < 1e-12, "got {fare}");
    }

    #[test]
    fn short_legs_hit_the_minimum_fare() {
        // 0.0002 * 500 + 1.08 * 60 / 3600 + 1.0 = 1.118 → floored at 2.0.
        let fare = drt_fare().leg_fare(Some(60.0), 500.0);
        assert_eq!(fare, 2.0);
    }

    #[test]
    fn zero_distance_and_undefined_time_skip_their_components() {
        // Only the base fare remains, then the minimum applies.
        let fare = drt_fare().leg_fare(None, 0.0);
        assert_eq!(fare, 2.0);
    }

    #[test]
    fn schedule_lookup_is_fare_free_for_unknown_modes() {
        let schedule = FareSchedule::new().with_mode("drt", drt_fare());
        assert!(schedule.for_mode("drt").is_some());
        assert!(schedule.for_mode("walk").is_none());
    }
}

#[cfg(test)]
mod per_trip {
    use ptx_core::PersonId;

    use crate::{
        COMPENSATION_PURPOSE, CompensationCondition, CompensationPolicy, FareCompensator,
        FareError, PerTripCompensator, RecordingSink, build_compensator,
    };

    const P1: PersonId = PersonId(1);
    const P2: PersonId = PersonId(2);

    /// Reference "pt"; companions "drt" and "drt2"; pays 1.0 money + 2.0 score.
    fn drt_pt_policy() -> CompensationPolicy {
        CompensationPolicy::new(1.0, 2.0)
            .with_reference_mode("pt")
            .with_companion_mode("drt")
            .with_companion_mode("drt2")
    }

    #[test]
    fn companion_only_trip_pays_nothing() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(0.0, P1, "drt", &mut sink);
        comp.on_activity_start(1.0, P1, "work", &mut sink);

        assert!(sink.money.is_empty());
        assert!(sink.score.is_empty());
    }

    #[test]
    fn reference_with_unrelated_mode_pays_nothing() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(2.0, P1, "car", &mut sink);
        comp.on_departure(3.0, P1, "pt", &mut sink);

        assert!(sink.money.is_empty());
    }

    #[test]
    fn companion_after_reference_pays_immediately() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(3.0, P1, "pt", &mut sink);
        comp.on_departure(4.0, P1, "drt", &mut sink);

        assert_eq!(sink.money.len(), 1);
        assert_eq!(sink.score.len(), 1);
        let money = &sink.money[0];
        assert_eq!(money.time_s, 4.0);
        assert_eq!(money.person, P1);
        assert_eq!(money.amount, 1.0);
        assert_eq!(money.purpose, COMPENSATION_PURPOSE);
        assert_eq!(sink.score[0].amount, 2.0);
    }

    #[test]
    fn companion_before_reference_pays_at_reference_departure() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(6.0, P1, "drt2", &mut sink);
        // Stage activity: the trip continues.
        comp.on_activity_start(7.0, P1, "drt interaction", &mut sink);
        comp.on_departure(8.0, P1, "pt", &mut sink);

        assert_eq!(sink.money.len(), 1);
        assert_eq!(sink.money[0].time_s, 8.0);
    }

    #[test]
    fn non_stage_activity_forfeits_pending_mark() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(0.0, P1, "drt", &mut sink);
        // Trip ends; the pending companion mark dies with it.
        comp.on_activity_start(1.0, P1, "blub", &mut sink);
        comp.on_departure(2.0, P1, "pt", &mut sink);

        assert!(sink.money.is_empty());
    }

    #[test]
    fn repeated_reference_departures_pay_nothing_extra() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(3.0, P1, "pt", &mut sink);
        comp.on_departure(4.0, P1, "drt", &mut sink);
        comp.on_departure(5.0, P1, "pt", &mut sink);

        assert_eq!(sink.payments_to(P1), 1);
    }

    /// The full two-person day: three payments for the first person (one in
    /// the first intermodal trip, two in the second — a companion leg before
    /// *and* after the reference leg), one for the second person.
    #[test]
    fn two_person_day_totals() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        // Trip: drt only, not intermodal.
        comp.on_departure(0.0, P1, "drt", &mut sink);
        comp.on_activity_start(1.0, P1, "work", &mut sink);
        // Trip: car + pt, then drt after pt.
        comp.on_departure(2.0, P1, "car", &mut sink);
        comp.on_departure(3.0, P1, "pt", &mut sink);
        comp.on_departure(4.0, P1, "drt", &mut sink);
        comp.on_departure(4.0, P1, "pt", &mut sink);
        comp.on_activity_start(5.0, P1, "blub", &mut sink);
        // Trip: drt2 before pt, then one more drt after pt.
        comp.on_departure(6.0, P1, "drt2", &mut sink);
        comp.on_activity_start(7.0, P1, "drt interaction", &mut sink);
        comp.on_departure(8.0, P1, "pt", &mut sink);
        comp.on_departure(9.0, P1, "pt", &mut sink);
        comp.on_departure(10.0, P1, "drt", &mut sink);
        // Second person: drt before pt.
        comp.on_departure(6.0, P2, "drt", &mut sink);
        comp.on_activity_start(7.0, P2, "drt interaction", &mut sink);
        comp.on_departure(8.0, P2, "pt", &mut sink);

        assert_eq!(sink.payments_to(P1), 3);
        assert!((sink.money_total_for(P1) - 3.0).abs() < 1e-12);
        assert_eq!(sink.payments_to(P2), 1);
        assert!((sink.money_total_for(P2) - 1.0).abs() < 1e-12);

        let score_total: f64 = sink.score.iter().map(|e| e.amount).sum();
        assert!((score_total - 8.0).abs() < 1e-12, "got {score_total}");
    }

    #[test]
    fn mode_in_both_sets_pays_on_its_first_departure() {
        let policy = CompensationPolicy::new(1.0, 2.0)
            .with_reference_mode("shuttle")
            .with_companion_mode("shuttle");
        let mut comp = PerTripCompensator::new(policy);
        let mut sink = RecordingSink::new();

        // The reference branch marks the trip first, so the companion branch
        // sees a reference departure and settles immediately.
        comp.on_departure(0.0, P1, "shuttle", &mut sink);
        assert_eq!(sink.payments_to(P1), 1);
    }

    #[test]
    fn reset_restores_a_fresh_day() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(0.0, P1, "drt", &mut sink);
        comp.on_departure(1.0, P1, "pt", &mut sink);
        assert_eq!(sink.payments_to(P1), 1);

        // A stuck person left mid-trip must not leak into the next day.
        comp.on_departure(2.0, P2, "drt", &mut sink);
        comp.reset();
        comp.on_departure(0.0, P2, "pt", &mut sink);
        assert_eq!(sink.payments_to(P2), 0);
    }

    #[test]
    fn day_end_flush_is_a_noop() {
        let mut comp = PerTripCompensator::new(drt_pt_policy());
        let mut sink = RecordingSink::new();

        comp.on_departure(0.0, P1, "drt", &mut sink);
        comp.on_day_end(86_400.0, &mut sink);

        assert!(sink.money.is_empty());
    }

    #[test]
    fn factory_dispatches_on_condition() {
        assert!(build_compensator(drt_pt_policy()).is_ok());

        let day_policy =
            drt_pt_policy().with_condition(CompensationCondition::PtModeUsedAnywhereInTheDay);
        match build_compensator(day_policy) {
            Err(FareError::UnsupportedCondition(c)) => {
                assert_eq!(c, CompensationCondition::PtModeUsedAnywhereInTheDay);
            }
            _ => panic!("expected UnsupportedCondition"),
        }
    }
}

#[cfg(test)]
mod event_log {
    use std::io::Cursor;

    use ptx_core::PersonId;

    use crate::{
        CompensationPolicy, CompensationSink, CsvCompensationWriter, FareCompensator, FareError,
        PerTripCompensator, PersonMoneyEvent, PersonScoreEvent, RecordingSink, TravelEvent,
        read_travel_events_reader, replay,
    };

    const FEED: &str = "\
time_s,person,kind,value
100,1,departure,drt
400,1,activity_start,drt interaction
450,1,departure,pt
2000,1,activity_start,work
";

    fn drt_pt_compensator() -> PerTripCompensator {
        PerTripCompensator::new(
            CompensationPolicy::new(1.0, 2.0)
                .with_reference_mode("pt")
                .with_companion_mode("drt"),
        )
    }

    #[test]
    fn reader_parses_a_mixed_feed() {
        let events = read_travel_events_reader(Cursor::new(FEED)).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            TravelEvent::Departure {
                time_s: 100.0,
                person: PersonId(1),
                mode:   "drt".to_owned(),
            }
        );
        assert_eq!(
            events[3],
            TravelEvent::ActivityStart {
                time_s:        2000.0,
                person:        PersonId(1),
                activity_type: "work".to_owned(),
            }
        );
    }

    #[test]
    fn reader_rejects_unknown_event_kinds() {
        let bad = "time_s,person,kind,value\n1,1,teleport,drt\n";
        match read_travel_events_reader(Cursor::new(bad)) {
            Err(FareError::Parse(msg)) => assert!(msg.contains("teleport"), "got {msg}"),
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn replay_after_reset_reproduces_the_same_emissions() {
        let events = read_travel_events_reader(Cursor::new(FEED)).unwrap();
        let mut comp = drt_pt_compensator();

        let mut first = RecordingSink::new();
        replay(&events, &mut comp, &mut first);
        comp.reset();
        let mut second = RecordingSink::new();
        replay(&events, &mut comp, &mut second);

        assert_eq!(first.money.len(), 1);
        assert_eq!(first.money, second.money);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn csv_writer_row_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compensation_events.csv");

        let mut writer = CsvCompensationWriter::create(&path).unwrap();
        writer.on_money(PersonMoneyEvent {
            time_s:  450.0,
            person:  PersonId(1),
            amount:  1.0,
            purpose: "intermodalTripFareCompensation".to_owned(),
        });
        writer.on_score(PersonScoreEvent {
            time_s:  450.0,
            person:  PersonId(1),
            amount:  2.0,
            purpose: "intermodalTripFareCompensation".to_owned(),
        });
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "time_s,person,kind,amount,purpose");
        assert_eq!(lines[1], "450,1,money,1,intermodalTripFareCompensation");
        assert_eq!(lines[2], "450,1,score,2,intermodalTripFareCompensation");
    }
}
