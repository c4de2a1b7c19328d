//! Task model
//!
//! A task is one eco action from the catalog. It is completed at most once
//! per session, by submitting evidence.

use serde::{Deserialize, Serialize};

use super::{EvidenceRef, Icon, MetricDeltas};

/// Completion state of a task
///
/// Completion and verification happen together, so a single enum carries
/// both flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TaskState {
    /// Not yet completed
    #[default]
    Pending,
    /// Completed and verified, with the evidence that completed it
    Verified {
        /// Handle to the submitted evidence
        evidence: EvidenceRef,
    },
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Verified { .. } => write!(f, "verified"),
        }
    }
}

/// An eco task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// What the user has to do
    pub description: String,

    /// Base point value used by the scoring policy
    pub points: u32,

    /// Icon shown next to the task
    #[serde(default)]
    pub icon: Icon,

    /// What completing the task adds to the metrics
    #[serde(default)]
    pub metrics: MetricDeltas,

    /// Completion state
    #[serde(flatten)]
    pub state: TaskState,
}

impl Task {
    /// Create a pending task
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            points,
            icon: Icon::default(),
            metrics: MetricDeltas::none(),
            state: TaskState::Pending,
        }
    }

    /// Set the icon
    #[must_use]
    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Set the metric contributions
    #[must_use]
    pub const fn with_metrics(mut self, metrics: MetricDeltas) -> Self {
        self.metrics = metrics;
        self
    }

    /// Whether the task has been completed
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, TaskState::Verified { .. })
    }

    /// Whether the task's evidence has been verified
    ///
    /// Always equal to [`Task::is_completed`].
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.is_completed()
    }

    /// Handle to the evidence, once completed
    #[must_use]
    pub const fn evidence(&self) -> Option<&EvidenceRef> {
        match &self.state {
            TaskState::Pending => None,
            TaskState::Verified { evidence } => Some(evidence),
        }
    }
}
