use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the map, persisted as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized form used in descriptions.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific fields, raw and derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// `cadence` in steps/min, `pace` in min/km.
    Running { cadence: f64, pace: f64 },
    /// `elevation_gain` in meters (may be negative), `speed` in km/h.
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Activity {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A recorded session. Built by [`Workout::running`] / [`Workout::cycling`]
/// or reconstructed by the store; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub(crate) id: String,
    pub(crate) coords: Coords,
    pub(crate) distance: f64,
    pub(crate) duration: f64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) description: String,
    pub(crate) activity: Activity,
}

impl Workout {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn coords(&self) -> Coords {
        self.coords
    }

    /// Kilometers.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Minutes.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub const fn cadence(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { cadence, .. } => Some(cadence),
            Activity::Cycling { .. } => None,
        }
    }

    pub const fn pace(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { pace, .. } => Some(pace),
            Activity::Cycling { .. } => None,
        }
    }

    pub const fn elevation_gain(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { elevation_gain, .. } => Some(elevation_gain),
            Activity::Running { .. } => None,
        }
    }

    pub const fn speed(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed, .. } => Some(speed),
            Activity::Running { .. } => None,
        }
    }

    /// Pace or speed is NaN/infinite, i.e. the workout was built from a zero
    /// or non-finite distance/duration.
    pub fn has_degenerate_metric(&self) -> bool {
        let metric = match self.activity {
            Activity::Running { pace, .. } => pace,
            Activity::Cycling { speed, .. } => speed,
        };
        !metric.is_finite()
    }
}
