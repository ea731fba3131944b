//! Error taxonomy for the tracking core.
//!
//! Every operation on [`crate::libs::tracker::Tracker`] fails with exactly one
//! of four kinds, so callers can tell a bad request from a storage outage:
//!
//! - **NotFound**: a referenced user, session, rule, type, pomodoro or pause is missing
//! - **InvalidArgument**: malformed input, rejected before anything is written
//! - **InvalidState**: the record is already terminal (completed, cancelled, finalized)
//! - **Storage**: the underlying SQLite operation failed

use std::fmt;
use thiserror::Error;

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Session,
    Rule,
    Type,
    Pomodoro,
    Pause,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Session => "Session",
            Entity::Rule => "Rule",
            Entity::Type => "Pomodoro type",
            Entity::Pomodoro => "Pomodoro",
            Entity::Pause => "Pause",
        };
        f.write_str(name)
    }
}

/// Errors returned by the tracking core.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Referenced record does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    /// Malformed input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation attempted on a record that is already terminal
    #[error("{entity} {id} is already {state}")]
    InvalidState { entity: Entity, id: i64, state: String },

    /// Underlying persistence failure
    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Coarse classification of a [`TrackerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    InvalidState,
    Storage,
}

impl ErrorKind {
    /// Client errors are safe to report back verbatim; storage errors are not.
    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::Storage)
    }

    /// Process exit status used by the command-line boundary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Storage => 1,
            ErrorKind::NotFound => 3,
            ErrorKind::InvalidArgument => 4,
            ErrorKind::InvalidState => 5,
        }
    }
}

impl TrackerError {
    pub fn not_found(entity: Entity, key: impl ToString) -> Self {
        TrackerError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_state(entity: Entity, id: i64, state: impl ToString) -> Self {
        TrackerError::InvalidState {
            entity,
            id,
            state: state.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::NotFound { .. } => ErrorKind::NotFound,
            TrackerError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            TrackerError::InvalidState { .. } => ErrorKind::InvalidState,
            TrackerError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for core operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
