//! Task ledger
//!
//! The catalog of tasks and their completion state, on top of a
//! [`TaskRepository`].

use log::debug;
use serde::Serialize;

use crate::core::error::LedgerError;
use crate::core::models::{EvidenceRef, Task, TaskState};
use crate::core::ports::TaskRepository;

/// Completed vs total task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Tasks in the catalog
    pub total: usize,
    /// Tasks completed this session
    pub completed: usize,
}

/// Holds the task catalog and each task's state
pub struct TaskLedger {
    repo: Box<dyn TaskRepository>,
}

impl std::fmt::Debug for TaskLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskLedger").finish_non_exhaustive()
    }
}

impl TaskLedger {
    /// Open a ledger over a repository
    ///
    /// Fails with [`LedgerError::EmptyCatalog`] when the repository has no
    /// tasks.
    pub fn new(repo: Box<dyn TaskRepository>) -> Result<Self, LedgerError> {
        if repo.list()?.is_empty() {
            return Err(LedgerError::EmptyCatalog);
        }
        Ok(Self { repo })
    }

    /// All tasks in catalog order
    pub fn list_tasks(&self) -> Result<Vec<Task>, LedgerError> {
        self.repo.list()
    }

    /// One task by id
    pub fn get_task(&self, id: &str) -> Result<Task, LedgerError> {
        self.repo.get(id)
    }

    /// Mark a task completed and verified with the given evidence
    ///
    /// Fails with [`LedgerError::AlreadyCompleted`] if it already is; the
    /// stored task is left untouched in that case.
    pub fn mark_completed(
        &mut self,
        id: &str,
        evidence: EvidenceRef,
    ) -> Result<Task, LedgerError> {
        let mut task = self.repo.get(id)?;
        if task.is_completed() {
            return Err(LedgerError::AlreadyCompleted(id.to_string()));
        }

        debug!("Marking task {id} completed with {evidence}");
        task.state = TaskState::Verified { evidence };
        self.repo.update(task.clone())?;
        Ok(task)
    }

    /// Completed vs total counts
    pub fn summary(&self) -> Result<LedgerSummary, LedgerError> {
        let tasks = self.repo.list()?;
        Ok(LedgerSummary {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.is_completed()).count(),
        })
    }
}
