//! Scoring policy
//!
//! Points depend on how many submissions the session has seen so far, across
//! all tasks: the first two add the task's points, the next two deduct them,
//! and everything after that leaves points alone. Metric contributions are
//! applied in full every time.

use crate::core::models::{ScoreDelta, Task};

/// Last upload ordinal that earns points
pub const LAST_REWARDED_UPLOAD: u32 = 2;

/// Last upload ordinal that costs points
pub const LAST_PENALIZED_UPLOAD: u32 = 4;

/// Point delta for a submission
///
/// `upload_ordinal` is the session-wide upload count after this submission
/// was counted, so the first submission is ordinal 1.
#[must_use]
pub fn score(base_points: u32, upload_ordinal: u32) -> i64 {
    let base = i64::from(base_points);
    match upload_ordinal {
        0 => 0,
        n if n <= LAST_REWARDED_UPLOAD => base,
        n if n <= LAST_PENALIZED_UPLOAD => -base,
        _ => 0,
    }
}

/// Full delta for submitting evidence for `task` as upload `upload_ordinal`
#[must_use]
pub fn score_submission(task: &Task, upload_ordinal: u32) -> ScoreDelta {
    ScoreDelta {
        points: score(task.points, upload_ordinal),
        metrics: task.metrics,
    }
}
