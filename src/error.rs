//! Error types of this crate

use thiserror::Error;

/// Errors that can happen when the planner state is changed
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The user input cannot be turned into a task (e.g. blank text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tag given to a new task is not part of the tag registry
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// The tag registry could not be built
    #[error("Invalid tag registry: {0}")]
    Registry(String),

    /// The change could not be durably saved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors of the underlying key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to read slot {key:?}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("Unable to write slot {key:?}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("Unable to serialize slot {key:?}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Quota exceeded when writing slot {key:?} ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// A failure that has been injected by a [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)
    #[error("Mocked failure of {0}")]
    Mocked(String),
}

impl PlannerError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PlannerError::InvalidInput(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, PlannerError::Storage(_))
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
