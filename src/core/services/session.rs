//! Session context
//!
//! Owns the two pieces of session-scoped mutable state: the upload counter
//! and the metrics aggregate. Callers hold it by `&mut`, which makes the
//! scoring path the single writer.

use crate::core::models::{Leaderboard, Metrics, ScoreDelta};

/// State of one signed-in session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    uploads: u32,
    metrics: Metrics,
}

impl SessionContext {
    /// A fresh session: no uploads, default metrics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session starting from existing metrics
    #[must_use]
    pub const fn with_metrics(metrics: Metrics) -> Self {
        Self {
            uploads: 0,
            metrics,
        }
    }

    /// Number of evidence submissions so far, across all tasks
    #[must_use]
    pub const fn upload_count(&self) -> u32 {
        self.uploads
    }

    /// Ordinal the next submission will get
    #[must_use]
    pub const fn next_ordinal(&self) -> u32 {
        self.uploads.saturating_add(1)
    }

    /// Current metrics
    #[must_use]
    pub const fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Count one submission and apply its delta
    ///
    /// Returns the ordinal the submission was counted as.
    pub fn record_submission(&mut self, delta: &ScoreDelta) -> u32 {
        self.uploads = self.next_ordinal();
        self.metrics = self.metrics.apply(delta);
        self.uploads
    }

    /// Take the rank of the leaderboard's current user, if there is one
    pub fn sync_rank(&mut self, leaderboard: &Leaderboard) -> Option<u32> {
        let rank = leaderboard.current_user()?.rank;
        self.metrics.rank = rank;
        Some(rank)
    }
}
