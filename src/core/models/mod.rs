//! Domain models for ecotrack
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - An eco action completed once by submitting evidence
//! - [`Evidence`] - The photo or video submitted for a task
//! - [`Metrics`] - Running impact totals for a session
//! - [`Challenge`] / [`Leaderboard`] - Read-only catalogs
//! - [`Icon`] - Closed set of icon identifiers

mod challenge;
mod evidence;
mod icon;
mod label;
mod leaderboard;
mod metrics;
mod task;

pub use challenge::Challenge;
pub use evidence::{Evidence, EvidenceRef, MediaKind, ValidationError, guess_media_type};
pub use icon::Icon;
pub use label::{Label, describe as describe_labels};
pub use leaderboard::{Leaderboard, LeaderboardEntry, rank_icon};
pub use metrics::{MetricDeltas, Metrics, ScoreDelta, TOP_USER_RANK, Theme};
pub use task::{Task, TaskState};
