//! Snapshot persistence of the workout collection.
//!
//! The whole ordered collection lives under one key as a JSON array of flat
//! records. Loading dispatches on each record's `kind` and rebuilds the
//! variant from its base fields, so pace/speed and the description are
//! derived again rather than trusted from storage.

use crate::error::StoreError;
use crate::types::{Activity, Coords, Workout};
use crate::workout::Extra;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_KEY: &str = "workouts";

/// Durable string-to-string storage, the local-storage stand-in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// What `load` does with a record it cannot rebuild.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Abort the whole load.
    Strict,
    /// Log and drop the record, keep the rest.
    #[default]
    Lenient,
}

/// One element of the persisted array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutRecord {
    id: String,
    coords: Coords,
    distance: f64,
    duration: f64,
    kind: String,
    description: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

impl From<&Workout> for WorkoutRecord {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id().to_string(),
            coords: w.coords(),
            distance: w.distance(),
            duration: w.duration(),
            kind: w.kind().as_str().to_string(),
            description: w.description().to_string(),
            created_at: w.created_at(),
            cadence: w.cadence(),
            pace: w.pace(),
            elevation_gain: w.elevation_gain(),
            speed: w.speed(),
        }
    }
}

impl WorkoutRecord {
    fn into_workout(self) -> Result<Workout, String> {
        let extra = match self.kind.as_str() {
            "running" => Extra::Cadence(self.cadence.ok_or("running record without cadence")?),
            "cycling" => Extra::ElevationGain(
                self.elevation_gain
                    .ok_or("cycling record without elevationGain")?,
            ),
            other => return Err(format!("unknown kind {other:?}")),
        };

        let workout = Workout::assemble(
            self.id,
            self.created_at,
            self.coords,
            self.distance,
            self.duration,
            extra,
        );

        if workout.description() != self.description {
            crate::dlog!(
                "description_rebuilt id={} stored={:?} rebuilt={:?}",
                workout.id(),
                self.description,
                workout.description()
            );
        }

        Ok(workout)
    }
}

/// First stored input field that JSON would turn into `null`.
fn non_finite_field(w: &Workout) -> Option<&'static str> {
    let c = w.coords();
    let extra = match *w.activity() {
        Activity::Running { cadence, .. } => ("cadence", cadence),
        Activity::Cycling { elevation_gain, .. } => ("elevationGain", elevation_gain),
    };
    [
        ("lat", c.lat),
        ("lng", c.lng),
        ("distance", w.distance()),
        ("duration", w.duration()),
        extra,
    ]
    .into_iter()
    .find(|(_, v)| !v.is_finite())
    .map(|(name, _)| name)
}

pub struct WorkoutStore<B> {
    backend: B,
    key: String,
    policy: LoadPolicy,
}

impl<B: KeyValueStore> WorkoutStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_KEY.to_string(),
            policy: LoadPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Overwrite the stored snapshot with `workouts`, in order.
    ///
    /// Refuses (and keeps the previous snapshot) when a base field is not
    /// finite. A non-finite pace/speed alone is fine: it is rebuilt on load.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StoreError> {
        for w in workouts {
            if let Some(field) = non_finite_field(w) {
                return Err(StoreError::NonFiniteField {
                    id: w.id().to_string(),
                    field,
                });
            }
            if w.has_degenerate_metric() {
                tracing::warn!(id = %w.id(), kind = %w.kind(), "saving workout with non-finite pace/speed");
            }
        }

        let records: Vec<WorkoutRecord> = workouts.iter().map(WorkoutRecord::from).collect();
        let blob = serde_json::to_string(&records).map_err(StoreError::Encode)?;
        self.backend.set(&self.key, &blob)?;

        tracing::debug!(key = %self.key, workouts = workouts.len(), bytes = blob.len(), "workouts saved");
        Ok(())
    }

    /// Read the snapshot back; a missing key is an empty collection.
    pub fn load(&self) -> Result<Vec<Workout>, StoreError> {
        let Some(blob) = self.backend.get(&self.key)? else {
            crate::dlog!("store_empty key={}", self.key);
            return Ok(Vec::new());
        };

        let values: Vec<JsonValue> =
            serde_json::from_str(&blob).map_err(|e| StoreError::Corrupt {
                reason: e.to_string(),
            })?;

        let mut out = Vec::with_capacity(values.len());
        let mut seen: HashSet<String> = HashSet::new();

        for (index, value) in values.into_iter().enumerate() {
            let rebuilt = serde_json::from_value::<WorkoutRecord>(value)
                .map_err(|e| e.to_string())
                .and_then(WorkoutRecord::into_workout);

            let workout = match rebuilt {
                Ok(w) => w,
                Err(reason) => match self.policy {
                    LoadPolicy::Strict => return Err(StoreError::CorruptRecord { index, reason }),
                    LoadPolicy::Lenient => {
                        tracing::warn!(index, %reason, "skipping corrupt stored workout");
                        continue;
                    }
                },
            };

            if !seen.insert(workout.id().to_string()) {
                match self.policy {
                    LoadPolicy::Strict => {
                        return Err(StoreError::DuplicateId {
                            id: workout.id().to_string(),
                        });
                    }
                    LoadPolicy::Lenient => {
                        tracing::warn!(index, id = %workout.id(), "stored workout id is not unique");
                    }
                }
            }

            out.push(workout);
        }

        tracing::debug!(key = %self.key, workouts = out.len(), "workouts loaded");
        Ok(out)
    }
}
