//! Unit tests for ptx-core primitives.

#[cfg(test)]
mod ids {
    use crate::PersonId;

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(PersonId::INVALID.0, u32::MAX);
        assert_eq!(PersonId::default(), PersonId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod legs {
    use crate::{Direction, Leg, mode_chain_label};

    #[test]
    fn constructors() {
        let timed = Leg::new("walk", 100.0, 200.0);
        assert_eq!(timed.travel_time_s, Some(100.0));
        assert_eq!(timed.distance_m, 200.0);

        let untimed = Leg::untimed("walk", 200.0);
        assert_eq!(untimed.travel_time_s, None);
    }

    #[test]
    fn chain_label_joins_with_dashes() {
        let legs = [
            Leg::new("walk", 100.0, 200.0),
            Leg::new("drt", 600.0, 5000.0),
            Leg::new("pt", 1200.0, 9000.0),
        ];
        assert_eq!(mode_chain_label(&legs), "walk-drt-pt");
    }

    #[test]
    fn chain_label_of_nothing_is_empty() {
        assert_eq!(mode_chain_label(&[]), "");
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Access.as_str(), "access");
        assert_eq!(Direction::Egress.to_string(), "egress");
    }
}

#[cfg(test)]
mod activities {
    use crate::is_stage_activity;

    #[test]
    fn interaction_suffix_is_stage() {
        assert!(is_stage_activity("pt interaction"));
        assert!(is_stage_activity("drt interaction"));
    }

    #[test]
    fn ordinary_activities_end_trips() {
        assert!(!is_stage_activity("home"));
        assert!(!is_stage_activity("work"));
        // Unrecognized labels are trip-ending too.
        assert!(!is_stage_activity("blub"));
    }

    #[test]
    fn suffix_requires_leading_space() {
        // "interaction" alone is an ordinary (trip-ending) activity type.
        assert!(!is_stage_activity("interaction"));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{PersonId, ScoringRng};

    #[test]
    fn offsets_stay_within_half_width() {
        let mut rng = ScoringRng::new(42);
        for _ in 0..10_000 {
            let v = rng.uniform_offset(3.0);
            assert!((-1.5..1.5).contains(&v), "got {v}");
        }
    }

    #[test]
    fn zero_width_yields_zero() {
        let mut rng = ScoringRng::new(42);
        assert_eq!(rng.uniform_offset(0.0), 0.0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ScoringRng::new(7);
        let mut b = ScoringRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.uniform_offset(1.0), b.uniform_offset(1.0));
        }
    }

    #[test]
    fn person_seeds_decorrelate() {
        let mut a = ScoringRng::for_person(42, PersonId(0));
        let mut b = ScoringRng::for_person(42, PersonId(1));
        assert_ne!(a.uniform_offset(1.0), b.uniform_offset(1.0));
    }

    #[test]
    fn inner_exposes_unit_interval_draws() {
        let mut rng = ScoringRng::new(42);
        for _ in 0..1000 {
            let u: f64 = rng.inner().r#gen();
            assert!((0.0..1.0).contains(&u), "got {u}");
        }
    }
}
