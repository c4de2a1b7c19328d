//! In-memory task repository
//!
//! Holds the catalog for the lifetime of a session. Nothing is written
//! anywhere; a new session starts from the seed again.

mod catalog;

pub use catalog::{default_challenges, default_leaderboard, default_tasks};

use crate::core::error::LedgerError;
use crate::core::models::Task;
use crate::core::ports::TaskRepository;

/// Task repository backed by a `Vec`, in catalog order
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Create a repository over the given tasks
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Create a repository seeded with the built-in catalog
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(default_tasks())
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list(&self) -> Result<Vec<Task>, LedgerError> {
        Ok(self.tasks.clone())
    }

    fn get(&self, id: &str) -> Result<Task, LedgerError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    fn update(&mut self, task: Task) -> Result<(), LedgerError> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| LedgerError::NotFound(task.id.clone()))?;
        *slot = task;
        Ok(())
    }
}
