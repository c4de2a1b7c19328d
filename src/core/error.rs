//! Errors raised by the task ledger and its repository

use thiserror::Error;

/// Errors from ledger and repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No task with this id
    #[error("task not found: {0}")]
    NotFound(String),

    /// The task was already completed this session
    #[error("task already completed: {0}")]
    AlreadyCompleted(String),

    /// No challenge with this id
    #[error("challenge not found: {0}")]
    ChallengeNotFound(String),

    /// The catalog has no tasks
    #[error("task catalog is empty")]
    EmptyCatalog,

    /// Storage backend failure
    #[error("task storage error: {0}")]
    Storage(String),
}
