//! Error types for workout construction and persistence.

use thiserror::Error;

/// Errors raised while turning user input into a [`crate::types::Workout`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkoutError {
    /// A distance, duration, cadence or elevation failed the finiteness or
    /// positivity checks.
    #[error("inputs must be positive finite numbers")]
    Validation,

    /// Description formatting ran before the discriminant was known.
    #[error("field `{field}` read before it was initialized")]
    UninitializedField { field: &'static str },
}

/// Errors raised by [`crate::store::WorkoutStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored blob is present but is not a JSON array.
    #[error("stored workouts are corrupt: {reason}")]
    Corrupt { reason: String },

    /// One element of the stored array could not be reconstructed.
    #[error("stored workout #{index} is corrupt: {reason}")]
    CorruptRecord { index: usize, reason: String },

    /// Two stored records share an id.
    #[error("stored workouts contain duplicate id {id}")]
    DuplicateId { id: String },

    /// A base field is NaN or infinite; JSON cannot hold it.
    #[error("workout {id} has a non-finite {field}")]
    NonFiniteField { id: String, field: &'static str },

    /// The collection could not be encoded.
    #[error("failed to encode workouts: {0}")]
    Encode(#[source] serde_json::Error),

    /// The key-value backend failed to read or write.
    #[error("storage backend failed: {0}")]
    Backend(#[from] rusqlite::Error),
}

/// Errors surfaced by [`crate::tracker::Tracker`].
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Workout(#[from] WorkoutError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The id generator handed out an id the collection already holds.
    #[error("workout id {id} is already recorded")]
    DuplicateId { id: String },
}

impl TrackerError {
    /// True for failures the user can fix by correcting the form.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Workout(WorkoutError::Validation))
    }
}
