//! Challenge model
//!
//! Challenges are longer-running goals (streaks, monthly targets). Joining
//! one only produces a notice; it never touches points or metrics.

use serde::{Deserialize, Serialize};

use super::Icon;

/// A multi-day challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// What the challenge asks for
    pub description: String,

    /// Points awarded on completion
    pub points: u32,

    /// Human-readable duration, e.g. "7 days" or "Ongoing"
    pub duration: String,

    /// Progress in percent
    pub progress: u32,

    /// Whether the challenge is done
    pub completed: bool,

    /// Icon shown next to the challenge
    #[serde(default)]
    pub icon: Icon,
}

impl Challenge {
    /// Progress clamped to 0..=100
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        self.progress.min(100)
    }

    /// Message shown when the user tries to join
    #[must_use]
    pub fn join_message(&self) -> String {
        if self.completed {
            "Challenge already completed!".to_string()
        } else {
            format!("Joined {}!", self.title)
        }
    }
}
