//! Person-keyed scoring-parameter resolution.
//!
//! # Design
//!
//! Behavioral overrides that the hosting population model attaches to
//! individual travelers (a subgroup label, a personal marginal-utility-of-money
//! factor) are held here as explicit typed tables keyed by [`PersonId`].
//! String-valued attributes are parsed once, when the table is built, never
//! inside the per-call resolution path.
//!
//! The registry is immutable after construction and shared by reference
//! across routing workers; the only mutable bit is the atomic first-use
//! notice flag.

use std::sync::atomic::{AtomicBool, Ordering};

use rustc_hash::FxHashMap;

use ptx_core::PersonId;

use crate::error::{ScoringError, ScoringResult};
use crate::params::ScoringParams;

// ── Resolved view ─────────────────────────────────────────────────────────────

/// Everything the disutility calculator needs for one traveler, resolved in
/// one registry pass per call.
pub struct ResolvedScoring<'a> {
    /// The traveler's parameter set (subgroup-specific where assigned).
    pub params: &'a ScoringParams,
    /// Base marginal utility of money, scaled by the traveler's personal
    /// factor where one is registered.
    pub marginal_utility_of_money: f64,
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Table of scoring-parameter sets and per-person overrides.
pub struct PersonScoringRegistry {
    default_params:  ScoringParams,
    subgroup_params: FxHashMap<String, ScoringParams>,
    person_subgroup: FxHashMap<PersonId, String>,
    money_factor:    FxHashMap<PersonId, f64>,
    factor_noticed:  AtomicBool,
}

impl PersonScoringRegistry {
    /// A registry where every person scores against `default_params`.
    pub fn new(default_params: ScoringParams) -> Self {
        PersonScoringRegistry {
            default_params,
            subgroup_params: FxHashMap::default(),
            person_subgroup: FxHashMap::default(),
            money_factor:    FxHashMap::default(),
            factor_noticed:  AtomicBool::new(false),
        }
    }

    /// Register a subgroup-specific parameter set (builder style).
    pub fn with_subgroup(mut self, label: impl Into<String>, params: ScoringParams) -> Self {
        self.subgroup_params.insert(label.into(), params);
        self
    }

    /// Assign a person to a subgroup.  Persons without an assignment score
    /// against the default set.
    pub fn assign_subgroup(&mut self, person: PersonId, label: impl Into<String>) {
        self.person_subgroup.insert(person, label.into());
    }

    /// Set a person's marginal-utility-of-money factor directly.
    pub fn set_money_factor(&mut self, person: PersonId, factor: f64) {
        self.money_factor.insert(person, factor);
    }

    /// Set a person's money factor from a raw string attribute.
    ///
    /// Population files carry the factor as a free-form attribute value, so
    /// anything can show up here.  Unparsable input is dropped with a warning
    /// and the person keeps the base marginal utility of money; resolution
    /// never fails because of a bad attribute.
    pub fn set_money_factor_attr(&mut self, person: PersonId, raw: &str) {
        match raw.trim().parse::<f64>() {
            Ok(factor) => {
                self.money_factor.insert(person, factor);
            }
            Err(_) => {
                log::warn!(
                    "ignoring unparsable marginal-utility-of-money factor {raw:?} for {person}; \
                     keeping the base value"
                );
            }
        }
    }

    /// Resolve one traveler's parameters and effective marginal utility of
    /// money.
    ///
    /// Fails only when the person's subgroup label has no registered
    /// parameter set; there is no numeric fallback for that.
    pub fn resolve(&self, person: PersonId) -> ScoringResult<ResolvedScoring<'_>> {
        let params = match self.person_subgroup.get(&person) {
            None => &self.default_params,
            Some(label) => {
                self.subgroup_params
                    .get(label)
                    .ok_or_else(|| ScoringError::UnknownSubgroup {
                        person,
                        label: label.clone(),
                    })?
            }
        };

        let mut marginal_utility_of_money = params.marginal_utility_of_money;
        if let Some(factor) = self.money_factor.get(&person) {
            marginal_utility_of_money *= factor;
            // Notice once per process, not once per call: this path runs for
            // every candidate leg sequence of every routing request.
            if !self.factor_noticed.swap(true, Ordering::Relaxed) {
                log::warn!(
                    "person-specific marginal utility of money in use \
                     (first seen: {person}, factor {factor})"
                );
            }
        }

        Ok(ResolvedScoring {
            params,
            marginal_utility_of_money,
        })
    }
}
