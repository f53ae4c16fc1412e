use crate::capability::{Clock, IdGenerator};
use crate::error::WorkoutError;
use crate::types::{Activity, Coords, Workout, WorkoutKind};
use crate::validate::validate;
use chrono::{DateTime, Utc};

/// Minutes per kilometer.
pub fn pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

/// Kilometers per hour; `duration` is in minutes.
pub fn speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

/// `"<Kind> on <day> <Mon> <year>"`, e.g. `Running on 15 Mar 2024`.
///
/// The date is read in UTC so the text can be rebuilt from the stored
/// timestamp on any machine.
pub fn format_description(
    kind: Option<WorkoutKind>,
    created_at: &DateTime<Utc>,
) -> Result<String, WorkoutError> {
    let kind = kind.ok_or(WorkoutError::UninitializedField { field: "kind" })?;
    Ok(describe(kind, created_at))
}

pub(crate) fn describe(kind: WorkoutKind, created_at: &DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%-d %b %Y"))
}

/// The kind-specific form field; also selects the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extra {
    Cadence(f64),
    ElevationGain(f64),
}

/// A submitted but not yet validated form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewWorkout {
    pub coords: Coords,
    pub distance: f64,
    pub duration: f64,
    pub extra: Extra,
}

impl Workout {
    /// Never fails: zero or non-finite inputs yield a non-finite pace.
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Self {
        Self::assemble(
            ids.next_id(),
            clock.now(),
            coords,
            distance,
            duration,
            Extra::Cadence(cadence),
        )
    }

    /// Never fails: zero or non-finite inputs yield a non-finite speed.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Self {
        Self::assemble(
            ids.next_id(),
            clock.now(),
            coords,
            distance,
            duration,
            Extra::ElevationGain(elevation_gain),
        )
    }

    /// Shared by construction and store reconstruction: derives the metric
    /// and description from the base fields.
    pub(crate) fn assemble(
        id: String,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        extra: Extra,
    ) -> Self {
        let activity = match extra {
            Extra::Cadence(cadence) => Activity::Running {
                cadence,
                pace: pace(distance, duration),
            },
            Extra::ElevationGain(elevation_gain) => Activity::Cycling {
                elevation_gain,
                speed: speed(distance, duration),
            },
        };
        let description = describe(activity.kind(), &created_at);

        Self {
            id,
            coords,
            distance,
            duration,
            created_at,
            description,
            activity,
        }
    }
}

/// Validate the form, then build the matching variant.
pub fn create_workout(
    input: &NewWorkout,
    ids: &mut dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<Workout, WorkoutError> {
    validate(input)?;

    let NewWorkout {
        coords,
        distance,
        duration,
        extra,
    } = *input;

    let workout = match extra {
        Extra::Cadence(cadence) => Workout::running(coords, distance, duration, cadence, ids, clock),
        Extra::ElevationGain(elevation) => {
            Workout::cycling(coords, distance, duration, elevation, ids, clock)
        }
    };

    tracing::info!(
        id = %workout.id(),
        kind = %workout.kind(),
        distance,
        duration,
        "workout created"
    );

    Ok(workout)
}
