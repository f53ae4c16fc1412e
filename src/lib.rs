//! Running and cycling workouts pinned to map coordinates, with derived
//! pace/speed, and a snapshot store that rebuilds each workout as its proper
//! variant on reload.

pub mod capability;
pub mod cli;
pub mod database;
pub mod error;
pub mod render;
pub mod store;
pub mod tracker;
pub mod types;
pub mod utils;
pub mod validate;
pub mod workout;

pub use error::{StoreError, TrackerError, WorkoutError};
pub use store::{KeyValueStore, LoadPolicy, MemoryStore, WorkoutStore};
pub use tracker::Tracker;
pub use types::{Activity, Coords, Workout, WorkoutKind};
pub use workout::{Extra, NewWorkout, create_workout};
