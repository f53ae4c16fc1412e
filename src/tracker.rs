//! The coordinator: owns the in-memory collection and keeps storage in step
//! with it after every mutation.

use crate::capability::{Clock, IdGenerator};
use crate::error::TrackerError;
use crate::store::{KeyValueStore, WorkoutStore};
use crate::types::Workout;
use crate::workout::{NewWorkout, create_workout};

pub struct Tracker<B> {
    workouts: Vec<Workout>,
    store: WorkoutStore<B>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<B: KeyValueStore> Tracker<B> {
    /// Load the persisted collection and take ownership of it.
    pub fn open(
        store: WorkoutStore<B>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, TrackerError> {
        let workouts = store.load()?;
        tracing::info!(workouts = workouts.len(), key = %store.key(), "tracker ready");
        Ok(Self {
            workouts,
            store,
            ids,
            clock,
        })
    }

    /// Validate, build, append and persist one workout.
    ///
    /// An id already in the collection is refused before anything is
    /// written. On a failed save the workout is dropped again, leaving memory
    /// equal to the last successful snapshot.
    pub fn record(&mut self, input: &NewWorkout) -> Result<&Workout, TrackerError> {
        let workout = create_workout(input, self.ids.as_mut(), self.clock.as_ref())?;
        if self.find(workout.id()).is_some() {
            tracing::warn!(id = %workout.id(), "id generator reissued a recorded id");
            return Err(TrackerError::DuplicateId {
                id: workout.id().to_string(),
            });
        }
        self.workouts.push(workout);

        if let Err(e) = self.store.save(&self.workouts) {
            self.workouts.pop();
            return Err(e.into());
        }

        Ok(&self.workouts[self.workouts.len() - 1])
    }

    /// In insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub const fn store(&self) -> &WorkoutStore<B> {
        &self.store
    }
}
