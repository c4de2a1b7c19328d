//! Evidence submission handler
//!
//! Turns an evidence upload into a completed task and a score:
//!
//! 1. validate the submission and reject tasks that are already completed
//! 2. start label detection for image evidence on a spawned task
//! 3. count the upload and score it with the session-wide ordinal
//! 4. persist the task as completed and verified, then apply the delta
//! 5. await label detection and report what it found
//!
//! Label detection never gates steps 3 and 4. A transport failure is
//! reported as a notice and logged; it does not roll anything back.

use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::core::error::LedgerError;
use crate::core::models::{
    Evidence, EvidenceRef, Label, MediaKind, Metrics, ScoreDelta, Task, ValidationError,
    describe_labels,
};
use crate::core::ports::{DetectError, LabelDetector};

use super::ledger::TaskLedger;
use super::scoring::{LAST_PENALIZED_UPLOAD, LAST_REWARDED_UPLOAD, score_submission};
use super::session::SessionContext;

/// Errors that abort a submission with no state change
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Missing or malformed submission fields
    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationError),

    /// No task with this id
    #[error("task not found: {0}")]
    NotFound(String),

    /// The task was already completed this session
    #[error("task already completed: {0}")]
    AlreadyCompleted(String),

    /// Any other ledger failure
    #[error(transparent)]
    Ledger(LedgerError),
}

impl From<LedgerError> for SubmissionError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(id) => Self::NotFound(id),
            LedgerError::AlreadyCompleted(id) => Self::AlreadyCompleted(id),
            other => Self::Ledger(other),
        }
    }
}

/// What label detection made of the evidence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The service recognized something
    Labels {
        /// Detected labels
        labels: Vec<Label>,
    },
    /// The service answered with no labels
    NoLabels,
    /// Evidence was not sent (videos are not labeled)
    Skipped {
        /// Why nothing was sent
        reason: String,
    },
    /// The service could not be reached or failed
    TransportFailure {
        /// Error description
        message: String,
    },
}

impl VerificationOutcome {
    fn from_detection(result: Result<Vec<Label>, DetectError>) -> Self {
        match result {
            Ok(labels) if labels.is_empty() => Self::NoLabels,
            Ok(labels) => Self::Labels { labels },
            Err(err) => Self::TransportFailure {
                message: err.to_string(),
            },
        }
    }
}

/// A non-blocking, user-visible message produced by a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Notice {
    /// Points were added
    PointsAdded(u32),
    /// Points were deducted
    PointsDeducted(u32),
    /// Labels were detected
    LabelsDetected(String),
    /// Detection ran but found nothing
    CouldNotAnalyze,
    /// Detection was not attempted
    VerificationSkipped(String),
    /// Detection failed
    VerificationFailed(String),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointsAdded(points) => write!(f, "+{points} points added!"),
            Self::PointsDeducted(points) => write!(f, "-{points} points deducted!"),
            Self::LabelsDetected(labels) => write!(f, "Detected objects: {labels}"),
            Self::CouldNotAnalyze => write!(f, "Could not analyze the image."),
            Self::VerificationSkipped(reason) => write!(f, "Verification skipped: {reason}"),
            Self::VerificationFailed(message) => write!(f, "Failed to verify evidence: {message}"),
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    /// The task, now completed and verified
    pub task: Task,
    /// Session-wide upload ordinal this submission was scored with
    pub ordinal: u32,
    /// Points and metrics applied
    pub delta: ScoreDelta,
    /// Metrics after applying the delta
    pub metrics: Metrics,
    /// What label detection reported
    pub verification: VerificationOutcome,
    /// Messages for the user, in order
    pub notices: Vec<Notice>,
    /// When the submission was processed (RFC3339)
    pub submitted_at: String,
}

/// Accepts evidence for tasks and applies the scoring policy
#[derive(Clone)]
pub struct EvidenceSubmissionHandler {
    detector: Arc<dyn LabelDetector>,
}

impl std::fmt::Debug for EvidenceSubmissionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceSubmissionHandler").finish_non_exhaustive()
    }
}

impl EvidenceSubmissionHandler {
    /// Create a handler that reports to `detector`
    #[must_use]
    pub fn new(detector: Arc<dyn LabelDetector>) -> Self {
        Self { detector }
    }

    /// Submit evidence for a task
    ///
    /// Must run inside a tokio runtime. On error nothing in `ledger` or
    /// `session` has changed.
    pub async fn submit(
        &self,
        ledger: &mut TaskLedger,
        session: &mut SessionContext,
        task_id: &str,
        evidence: Evidence,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        if task_id.trim().is_empty() {
            return Err(ValidationError::MissingTaskId.into());
        }

        let task = ledger.get_task(task_id)?;
        if task.is_completed() {
            info!("Task {task_id} already completed, ignoring submission");
            return Err(SubmissionError::AlreadyCompleted(task_id.to_string()));
        }

        let kind = evidence.validate()?;
        info!(
            "Submitting {} ({} bytes, {}) for task {task_id}",
            evidence.file_name, evidence.declared_size, evidence.media_type
        );

        let verification = self.start_verification(kind, &evidence);

        let ordinal = session.next_ordinal();
        let delta = score_submission(&task, ordinal);
        debug!("Upload #{ordinal} for task {task_id} scores {} points", delta.points);

        let evidence_ref = EvidenceRef::for_upload(ordinal, &evidence.file_name);
        let task = ledger.mark_completed(task_id, evidence_ref)?;
        session.record_submission(&delta);
        let metrics = session.metrics();

        let verification = match verification {
            Some(handle) => Self::finish_verification(handle).await,
            None => VerificationOutcome::Skipped {
                reason: format!("{kind} evidence is not sent for label detection"),
            },
        };

        let mut notices = Vec::new();
        notices.extend(points_notice(ordinal, delta.points));
        notices.push(verification_notice(&verification));

        Ok(SubmissionOutcome {
            task,
            ordinal,
            delta,
            metrics,
            verification,
            notices,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    fn start_verification(
        &self,
        kind: MediaKind,
        evidence: &Evidence,
    ) -> Option<JoinHandle<Result<Vec<Label>, DetectError>>> {
        if kind != MediaKind::Image {
            return None;
        }

        let detector = Arc::clone(&self.detector);
        let image = evidence.to_base64();
        Some(tokio::spawn(async move { detector.detect_labels(&image).await }))
    }

    async fn finish_verification(
        handle: JoinHandle<Result<Vec<Label>, DetectError>>,
    ) -> VerificationOutcome {
        let result = handle.await.unwrap_or_else(|e| {
            Err(DetectError::Transport(format!("verification task failed: {e}")))
        });

        let outcome = VerificationOutcome::from_detection(result);
        match &outcome {
            VerificationOutcome::Labels { labels } => {
                info!("Detected labels: {}", describe_labels(labels));
            },
            VerificationOutcome::TransportFailure { message } => {
                warn!("Evidence verification failed, keeping score: {message}");
            },
            VerificationOutcome::NoLabels | VerificationOutcome::Skipped { .. } => {},
        }
        outcome
    }
}

/// The points notice follows the scoring tier, so a 0-point task still
/// reports "+0" or "-0" inside the rewarded and penalized uploads.
fn points_notice(ordinal: u32, points: i64) -> Option<Notice> {
    let magnitude = u32::try_from(points.unsigned_abs()).unwrap_or(u32::MAX);
    match ordinal {
        1..=LAST_REWARDED_UPLOAD => Some(Notice::PointsAdded(magnitude)),
        n if n > LAST_REWARDED_UPLOAD && n <= LAST_PENALIZED_UPLOAD => {
            Some(Notice::PointsDeducted(magnitude))
        },
        _ => None,
    }
}

fn verification_notice(outcome: &VerificationOutcome) -> Notice {
    match outcome {
        VerificationOutcome::Labels { labels } => Notice::LabelsDetected(describe_labels(labels)),
        VerificationOutcome::NoLabels => Notice::CouldNotAnalyze,
        VerificationOutcome::Skipped { reason } => Notice::VerificationSkipped(reason.clone()),
        VerificationOutcome::TransportFailure { message } => {
            Notice::VerificationFailed(message.clone())
        },
    }
}
