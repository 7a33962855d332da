//! feeder — smallest end-to-end example for the rust_ptx transit extensions.
//!
//! Replays one day of travel events for three travelers using a drt shuttle
//! that feeds a rail line, pays out per-trip fare compensation, and then
//! ranks three station-access alternatives per traveler with the same
//! compensation mirrored into the scores.  Swap the embedded event log for a
//! real one to audit a full scenario day.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use ptx_core::{Direction, Leg, PersonId, mode_chain_label};
use ptx_fare::{
    CompensationPolicy, CsvCompensationWriter, FareParams, FareSchedule, RecordingSink,
    build_compensator, read_travel_events_reader, replay,
};
use ptx_routing::{
    AccessEgressScorer, RandomizationEpoch, RandomizationPolicies, UtilityRandomization,
};
use ptx_scoring::{ModeScoringParams, PersonScoringRegistry, ScoringParams};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const MONEY_PER_TRIP:  f64 = 2.0;
const SCORE_PER_TRIP:  f64 = 0.3;
const TRAVELERS:       [PersonId; 3] = [PersonId(1), PersonId(2), PersonId(3)];

// ── Travel-event log ──────────────────────────────────────────────────────────

// Person 1 commutes via the drt feeder both ways: the morning drt leg is paid
// when the rail departure follows it, the evening one immediately after the
// rail leg.  Person 2 walks to the station and earns nothing.  Person 3 rides
// drt but never boards rail, so the pending mark is forfeited at the shop.
const EVENTS_CSV: &str = "\
time_s,person,kind,value\n\
26100,1,departure,drt\n\
26700,1,activity_start,drt interaction\n\
26760,1,departure,pt\n\
27000,2,departure,walk\n\
27600,2,activity_start,walk interaction\n\
27660,2,departure,pt\n\
28500,1,activity_start,pt interaction\n\
28560,1,departure,walk\n\
28800,1,activity_start,work\n\
29400,2,activity_start,pt interaction\n\
29460,2,departure,walk\n\
29700,2,activity_start,work\n\
30000,3,departure,drt\n\
30900,3,activity_start,drt interaction\n\
30960,3,departure,walk\n\
31200,3,activity_start,shop\n\
61200,1,departure,pt\n\
63000,1,activity_start,pt interaction\n\
63060,1,departure,drt\n\
63900,1,activity_start,home\n\
";

// ── Scoring setup ─────────────────────────────────────────────────────────────

fn scoring_registry() -> PersonScoringRegistry {
    let params = ScoringParams::new(1.0, 6.0 / 3600.0)
        .with_mode(
            "walk",
            ModeScoringParams {
                marginal_utility_of_traveling_s: -6.0 / 3600.0,
                ..ModeScoringParams::default()
            },
        )
        .with_mode(
            "drt",
            ModeScoringParams {
                marginal_utility_of_traveling_s: -4.0 / 3600.0,
                constant: -2.0,
                ..ModeScoringParams::default()
            },
        );

    let mut registry = PersonScoringRegistry::new(params);
    // Person 3 holds a reduced-rate card: monetary terms count half.
    registry.set_money_factor(PersonId(3), 0.5);
    registry
}

fn drt_fares() -> FareSchedule {
    FareSchedule::new().with_mode(
        "drt",
        FareParams {
            base_fare:              1.2,
            distance_fare_m:        0.0003,
            time_fare_h:            0.0,
            min_fare_per_trip:      2.0,
            daily_subscription_fee: 0.0,
        },
    )
}

/// Station-access alternatives every traveler chooses between.
fn access_alternatives() -> [Vec<Leg>; 3] {
    [
        vec![Leg::new("walk", 990.0, 1400.0)],
        vec![
            Leg::new("walk", 120.0, 100.0),
            Leg::new("drt", 360.0, 2800.0),
            Leg::new("walk", 60.0, 50.0),
        ],
        vec![Leg::new("drt", 480.0, 3600.0)],
    ]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== feeder — intermodal drt + rail day ===");
    println!("Travelers: {}  |  Seed: {SEED}", TRAVELERS.len());
    println!();

    // 1. Parse the day's travel-event log.
    let events = read_travel_events_reader(Cursor::new(EVENTS_CSV))?;
    println!("Loaded {} travel events", events.len());

    // 2. Pay per-trip compensation for drt legs combined with rail.
    let policy = CompensationPolicy::new(MONEY_PER_TRIP, SCORE_PER_TRIP)
        .with_reference_mode("pt")
        .with_companion_mode("drt");
    let mut compensator = build_compensator(policy.clone())?;
    let mut sink = RecordingSink::new();
    replay(&events, compensator.as_mut(), &mut sink);

    println!();
    println!("{:<10} {:>10} {:>10} {:>10}", "Person", "Payments", "Money", "Score");
    println!("{}", "-".repeat(44));
    for person in TRAVELERS {
        let score: f64 = sink
            .score
            .iter()
            .filter(|e| e.person == person)
            .map(|e| e.amount)
            .sum();
        println!(
            "{:<10} {:>10} {:>10.2} {:>10.2}",
            person.index(),
            sink.payments_to(person),
            sink.money_total_for(person),
            score,
        );
    }

    // 3. Export the emissions to CSV: reset, then replay into the writer.
    std::fs::create_dir_all("output/feeder")?;
    compensator.reset();
    let mut writer = CsvCompensationWriter::create(Path::new("output/feeder/compensation.csv"))?;
    replay(&events, compensator.as_mut(), &mut writer);
    writer.finish()?;
    println!();
    println!("Wrote output/feeder/compensation.csv");

    // 4. Rank the station-access alternatives per traveler.  The same policy
    //    is mirrored into the disutilities, so the shuttle competes with the
    //    walk even though it charges a fare.
    let scorer = AccessEgressScorer::new(scoring_registry())
        .with_fares(drt_fares())
        .with_compensation(policy)
        .with_randomization(RandomizationPolicies::new().with_mode(
            "drt",
            UtilityRandomization {
                additive_width:        0.0,
                additive_width_frozen: 0.5,
            },
        ));

    println!();
    println!("{:<10} {:<16} {:>10} {:>12}", "Person", "Chain", "Time [s]", "Disutility");
    println!("{}", "-".repeat(52));
    for person in TRAVELERS {
        let mut epoch = RandomizationEpoch::for_person(SEED, person);
        let mut scored = Vec::new();
        for legs in access_alternatives() {
            scored.push(scorer.evaluate(legs, person, Direction::Access, &mut epoch)?);
        }
        let best = scored
            .iter()
            .map(|s| s.disutility)
            .fold(f64::INFINITY, f64::min);
        for score in &scored {
            let marker = if score.disutility == best { "  <- best" } else { "" };
            println!(
                "{:<10} {:<16} {:>10.0} {:>12.3}{marker}",
                person.index(),
                mode_chain_label(&score.legs),
                score.travel_time_s,
                score.disutility,
            );
        }
    }

    Ok(())
}
