//! The access/egress leg-sequence scorer.

use ptx_core::{Direction, Leg, PersonId};
use ptx_fare::{CompensationPolicy, FareSchedule};
use ptx_scoring::PersonScoringRegistry;

use crate::error::{RoutingError, RoutingResult};
use crate::randomization::{RandomizationEpoch, RandomizationPolicies};

// ── Result ────────────────────────────────────────────────────────────────────

/// Outcome of scoring one candidate leg sequence.
#[derive(Debug)]
pub struct AccessEgressScore {
    /// Negated summed utility; lower means more attractive.
    pub disutility:    f64,
    /// Sum of the defined leg travel times, in seconds.
    pub travel_time_s: f64,
    /// The evaluated legs, moved through unmodified.
    pub legs:          Vec<Leg>,
    pub direction:     Direction,
}

// ── Scorer ────────────────────────────────────────────────────────────────────

/// Condenses candidate access/egress leg sequences into disutilities.
///
/// Holds only read-only tables, so one scorer is shared across routing
/// workers; each worker threads its own [`RandomizationEpoch`] through
/// [`evaluate`][Self::evaluate].
pub struct AccessEgressScorer {
    scoring:       PersonScoringRegistry,
    fares:         FareSchedule,
    compensations: Vec<CompensationPolicy>,
    randomization: RandomizationPolicies,
    /// The scheduled transit mode the scored legs feed.  Compensation
    /// policies mirror into leg scores only when their reference set covers
    /// this mode.
    transit_mode:  String,
}

impl AccessEgressScorer {
    /// A scorer with no fares, compensations, or randomization, feeding the
    /// `"pt"` transit mode.
    pub fn new(scoring: PersonScoringRegistry) -> Self {
        AccessEgressScorer {
            scoring,
            fares:         FareSchedule::new(),
            compensations: Vec::new(),
            randomization: RandomizationPolicies::new(),
            transit_mode:  "pt".to_owned(),
        }
    }

    pub fn with_fares(mut self, fares: FareSchedule) -> Self {
        self.fares = fares;
        self
    }

    pub fn with_compensation(mut self, policy: CompensationPolicy) -> Self {
        self.compensations.push(policy);
        self
    }

    pub fn with_randomization(mut self, randomization: RandomizationPolicies) -> Self {
        self.randomization = randomization;
        self
    }

    pub fn with_transit_mode(mut self, mode: impl Into<String>) -> Self {
        self.transit_mode = mode.into();
        self
    }

    /// Score one candidate leg sequence for `person` in `direction`.
    ///
    /// Per leg, in order: travel-time utility (time spent traveling forgoes
    /// the baseline activity), distance utility, monetary distance cost, the
    /// mode constant, the mode's fare (where one is scheduled), compensation
    /// mirroring, and the mode's randomized offsets.  The legs vector is
    /// returned inside the score untouched.
    ///
    /// Fails when a leg's mode has no scoring parameters, or when the
    /// person's subgroup has no parameter set.  Absent fare entries and
    /// absent randomization entries are normal and skipped.
    pub fn evaluate(
        &self,
        legs:      Vec<Leg>,
        person:    PersonId,
        direction: Direction,
        epoch:     &mut RandomizationEpoch,
    ) -> RoutingResult<AccessEgressScore> {
        let resolved = self.scoring.resolve(person)?;
        let params = resolved.params;
        let marginal_utility_of_money = resolved.marginal_utility_of_money;

        epoch.rekey(person, direction);

        let mut utility = 0.0;
        let mut travel_time_s = 0.0;

        for leg in &legs {
            let mode_params =
                params
                    .mode(&leg.mode)
                    .ok_or_else(|| RoutingError::MissingModeParams {
                        mode: leg.mode.clone(),
                    })?;

            if let Some(t) = leg.travel_time_s {
                travel_time_s += t;
                utility += t
                    * (mode_params.marginal_utility_of_traveling_s
                        - params.marginal_utility_of_performing_s);
            }
            if leg.distance_m != 0.0 {
                utility += leg.distance_m * mode_params.marginal_utility_of_distance_m;
                utility +=
                    leg.distance_m * mode_params.monetary_distance_rate * marginal_utility_of_money;
            }
            utility += mode_params.constant;

            if let Some(fare) = self.fares.for_mode(&leg.mode) {
                utility +=
                    -fare.leg_fare(leg.travel_time_s, leg.distance_m) * marginal_utility_of_money;
            }

            for policy in &self.compensations {
                if policy.is_companion(&leg.mode) && policy.is_reference(&self.transit_mode) {
                    // Mirror, at planning time, the compensation the tracker
                    // pays at simulation time; positive, it is a refund.
                    utility += policy.money_per_trip * marginal_utility_of_money;
                    utility += policy.score_per_trip;
                }
            }

            if let Some(randomization) = self.randomization.for_mode(&leg.mode) {
                let width = randomization.additive_width;
                if width != 0.0 {
                    utility += epoch.unfrozen_offset(width);
                }
                let frozen_width = randomization.additive_width_frozen;
                if frozen_width != 0.0 {
                    utility += epoch.frozen_offset(&leg.mode, frozen_width);
                }
            }
        }

        Ok(AccessEgressScore {
            disutility: -utility,
            travel_time_s,
            legs,
            direction,
        })
    }
}
