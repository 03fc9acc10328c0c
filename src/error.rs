use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the task store and its storage collaborators.
///
/// Operations report failure through their return value; the store never
/// panics on bad input, never logs to a user-facing surface, and never
/// terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    /// The stored task data could not be deserialized.
    #[error("corrupt task storage: {0}")]
    CorruptStorage(#[from] serde_json::Error),
    /// An operation referenced a task id that is not in the store.
    #[error("no task with id {0}")]
    TaskNotFound(u64),
    /// Task creation was given empty input text.
    #[error("no task input given")]
    InvalidInput,
    /// The storage collaborator failed to read or write.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
