//! Unit tests for scoring parameters and person-keyed resolution.

#[cfg(test)]
mod params {
    use crate::{ModeScoringParams, ScoringParams};

    #[test]
    fn mode_lookup() {
        let params = ScoringParams::new(1.0, 0.00011).with_mode(
            "walk",
            ModeScoringParams {
                marginal_utility_of_traveling_s: -0.00016,
                marginal_utility_of_distance_m:  -0.00015,
                monetary_distance_rate:          -0.00017,
                constant:                        -1.2,
            },
        );

        let walk = params.mode("walk").unwrap();
        assert_eq!(walk.constant, -1.2);
        assert!(params.mode("hoverboard").is_none());
    }

    #[test]
    fn default_mode_coefficients_are_zero() {
        let zero = ModeScoringParams::default();
        assert_eq!(zero.marginal_utility_of_traveling_s, 0.0);
        assert_eq!(zero.constant, 0.0);
    }
}

#[cfg(test)]
mod registry {
    use ptx_core::PersonId;

    use crate::{ModeScoringParams, PersonScoringRegistry, ScoringError, ScoringParams};

    /// Default set: walk constant −1.2, money 1.0.
    fn base_params() -> ScoringParams {
        ScoringParams::new(1.0, 0.00011).with_mode(
            "walk",
            ModeScoringParams {
                marginal_utility_of_traveling_s: -0.00016,
                marginal_utility_of_distance_m:  -0.00015,
                monetary_distance_rate:          -0.00017,
                constant:                        -1.2,
            },
        )
    }

    /// Subgroup set: walk constant −100, nothing else.
    fn subgroup_params() -> ScoringParams {
        ScoringParams::new(1.0, 0.0002).with_mode(
            "walk",
            ModeScoringParams {
                constant: -100.0,
                ..ModeScoringParams::default()
            },
        )
    }

    #[test]
    fn unassigned_person_gets_default_set() {
        let registry = PersonScoringRegistry::new(base_params())
            .with_subgroup("commuters", subgroup_params());

        let resolved = registry.resolve(PersonId(1)).unwrap();
        assert_eq!(resolved.params.mode("walk").unwrap().constant, -1.2);
        assert_eq!(resolved.marginal_utility_of_money, 1.0);
    }

    #[test]
    fn assigned_person_gets_subgroup_set() {
        let mut registry = PersonScoringRegistry::new(base_params())
            .with_subgroup("commuters", subgroup_params());
        registry.assign_subgroup(PersonId(2), "commuters");

        let resolved = registry.resolve(PersonId(2)).unwrap();
        assert_eq!(resolved.params.mode("walk").unwrap().constant, -100.0);
    }

    #[test]
    fn missing_subgroup_set_is_an_error() {
        let mut registry = PersonScoringRegistry::new(base_params());
        registry.assign_subgroup(PersonId(3), "ghosts");

        let err = registry.resolve(PersonId(3)).map(|_| ()).unwrap_err();
        let ScoringError::UnknownSubgroup { person, label } = err;
        assert_eq!(person, PersonId(3));
        assert_eq!(label, "ghosts");
    }

    #[test]
    fn money_factor_scales_base_value() {
        let mut registry = PersonScoringRegistry::new(base_params());
        registry.set_money_factor(PersonId(4), 2.0);

        assert_eq!(registry.resolve(PersonId(4)).unwrap().marginal_utility_of_money, 2.0);
        // Unrelated persons keep the base value.
        assert_eq!(registry.resolve(PersonId(5)).unwrap().marginal_utility_of_money, 1.0);
    }

    #[test]
    fn string_attribute_is_parsed_once_at_build_time() {
        let mut registry = PersonScoringRegistry::new(base_params());
        registry.set_money_factor_attr(PersonId(6), " 0.5 ");

        assert_eq!(registry.resolve(PersonId(6)).unwrap().marginal_utility_of_money, 0.5);
    }

    #[test]
    fn unparsable_attribute_keeps_base_value() {
        let mut registry = PersonScoringRegistry::new(base_params());
        registry.set_money_factor_attr(PersonId(7), "rich");

        assert_eq!(registry.resolve(PersonId(7)).unwrap().marginal_utility_of_money, 1.0);
    }
}
