//! Task repository port
//!
//! Defines the data-access interface the ledger sits on.

use super::super::error::LedgerError;
use super::super::models::Task;

/// Repository for the task catalog
///
/// Implementations keep tasks in catalog definition order. Updates go
/// through `&mut self`; there is exactly one writer per session.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send {
    /// All tasks, in catalog order
    fn list(&self) -> Result<Vec<Task>, LedgerError>;

    /// A single task by id
    ///
    /// Fails with [`LedgerError::NotFound`] when absent.
    fn get(&self, id: &str) -> Result<Task, LedgerError> {
        self.list()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    /// Replace the stored task that has the same id
    ///
    /// Fails with [`LedgerError::NotFound`] when no such task exists.
    fn update(&mut self, task: Task) -> Result<(), LedgerError>;
}
