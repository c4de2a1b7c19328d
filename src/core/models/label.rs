//! Label model
//!
//! A label is one thing the label-detection service recognized in an image.

use serde::{Deserialize, Serialize};

/// A detected label with its confidence score (0.0 to 1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// What was recognized, e.g. "Bus"
    pub description: String,

    /// Confidence
    #[serde(default)]
    pub score: f32,
}

impl Label {
    /// Create a label
    #[must_use]
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

/// Join label descriptions for display, e.g. "Bus, Road"
#[must_use]
pub fn describe(labels: &[Label]) -> String {
    labels.iter().map(|l| l.description.as_str()).collect::<Vec<_>>().join(", ")
}
