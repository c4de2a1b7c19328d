//! Business logic services
//!
//! Orchestration logic that operates on domain models and talks to the
//! outside world only through port traits.
//!
//! - [`scoring`] - The stepped point policy
//! - [`session`] - Upload counter and metrics for one session
//! - [`ledger`] - Task catalog and completion state
//! - [`submission`] - Evidence upload → verify → score → metrics
//! - [`challenges`] - Challenge catalog and joining

pub mod challenges;
pub mod ledger;
pub mod scoring;
pub mod session;
pub mod submission;

pub use challenges::ChallengeBoard;
pub use ledger::{LedgerSummary, TaskLedger};
pub use scoring::{LAST_PENALIZED_UPLOAD, LAST_REWARDED_UPLOAD, score, score_submission};
pub use session::SessionContext;
pub use submission::{
    EvidenceSubmissionHandler, Notice, SubmissionError, SubmissionOutcome, VerificationOutcome,
};
