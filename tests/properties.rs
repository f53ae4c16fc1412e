//! Property checks for metrics, validation and the store round trip.

use chrono::{DateTime, TimeZone, Utc};
use mapty::capability::{FixedClock, SequentialIds};
use mapty::validate::{all_finite, all_positive};
use mapty::workout::format_description;
use mapty::{Coords, Extra, MemoryStore, NewWorkout, Workout, WorkoutKind, WorkoutStore, create_workout};
use proptest::prelude::*;
use std::collections::HashSet;

fn positive() -> impl Strategy<Value = f64> {
    1e-3..1e4_f64
}

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| Utc.timestamp_opt(secs, nanos).unwrap())
}

fn new_workout() -> impl Strategy<Value = NewWorkout> {
    (
        -90.0..=90.0_f64,
        -180.0..=180.0_f64,
        positive(),
        positive(),
        prop_oneof![
            positive().prop_map(Extra::Cadence),
            (-5e3..5e3_f64).prop_map(Extra::ElevationGain),
        ],
    )
        .prop_map(|(lat, lng, distance, duration, extra)| NewWorkout {
            coords: Coords::new(lat, lng),
            distance,
            duration,
            extra,
        })
}

proptest! {
    #[test]
    fn metrics_follow_their_formulas(distance in positive(), duration in positive(), at in timestamp()) {
        let mut ids = SequentialIds::new("p");
        let clock = FixedClock(at);
        let run = Workout::running(Coords::new(0.0, 0.0), distance, duration, 160.0, &mut ids, &clock);
        let ride = Workout::cycling(Coords::new(0.0, 0.0), distance, duration, 0.0, &mut ids, &clock);

        prop_assert_eq!(run.pace(), Some(duration / distance));
        prop_assert_eq!(ride.speed(), Some(distance / (duration / 60.0)));
    }

    #[test]
    fn predicates_reject_bad_values(
        values in prop::collection::vec(positive(), 0..8),
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
        non_positive in -1e4..=0.0_f64,
        slot in any::<prop::sample::Index>(),
    ) {
        prop_assert!(all_finite(&values));
        prop_assert!(all_positive(&values));

        let mut values = values;

        let at = slot.index(values.len() + 1);
        let mut with_bad = values.clone();
        with_bad.insert(at, bad);
        prop_assert!(!all_finite(&with_bad));

        values.insert(at, non_positive);
        prop_assert!(!all_positive(&values));
    }

    #[test]
    fn description_is_stable(at in timestamp()) {
        for kind in [WorkoutKind::Running, WorkoutKind::Cycling] {
            let a = format_description(Some(kind), &at).unwrap();
            let b = format_description(Some(kind), &at).unwrap();
            prop_assert!(a.starts_with(kind.label()));
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn store_round_trip_is_exact(
        inputs in prop::collection::vec(new_workout(), 0..12),
        at in timestamp(),
    ) {
        let mut ids = SequentialIds::new("p");
        let clock = FixedClock(at);
        let workouts: Vec<Workout> = inputs
            .iter()
            .map(|input| create_workout(input, &mut ids, &clock).unwrap())
            .collect();

        let distinct: HashSet<&str> = workouts.iter().map(Workout::id).collect();
        prop_assert_eq!(distinct.len(), workouts.len());

        let mut store = WorkoutStore::new(MemoryStore::new());
        store.save(&workouts).unwrap();
        prop_assert_eq!(store.load().unwrap(), workouts);
    }
}
