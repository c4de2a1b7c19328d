//! Impact metrics
//!
//! [`MetricDeltas`] is what a single task contributes; [`Metrics`] is the
//! running aggregate shown on the dashboard. A [`ScoreDelta`] is one scoring
//! decision, and [`Metrics::apply`] is the only way the aggregate moves.

use serde::{Deserialize, Serialize};

/// Rank at or below which a user counts as a top user
pub const TOP_USER_RANK: u32 = 5;

/// Per-task metric contributions; absent fields contribute nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricDeltas {
    /// Carbon score gained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_score: Option<u32>,

    /// Liters of water saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_saved: Option<u32>,

    /// Trees saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trees_saved: Option<u32>,
}

impl MetricDeltas {
    /// No contributions
    #[must_use]
    pub const fn none() -> Self {
        Self {
            carbon_score: None,
            water_saved: None,
            trees_saved: None,
        }
    }

    /// Set the carbon score contribution
    #[must_use]
    pub const fn with_carbon_score(mut self, value: u32) -> Self {
        self.carbon_score = Some(value);
        self
    }

    /// Set the water saved contribution
    #[must_use]
    pub const fn with_water_saved(mut self, value: u32) -> Self {
        self.water_saved = Some(value);
        self
    }

    /// Set the trees saved contribution
    #[must_use]
    pub const fn with_trees_saved(mut self, value: u32) -> Self {
        self.trees_saved = Some(value);
        self
    }

    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.carbon_score.is_none() && self.water_saved.is_none() && self.trees_saved.is_none()
    }
}

/// The outcome of scoring one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreDelta {
    /// Points added (positive) or deducted (negative)
    pub points: i64,

    /// Metric contributions, always applied in full
    pub metrics: MetricDeltas,
}

/// Dashboard theme selected by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Top users
    Spring,
    /// Everyone else
    Thunderstorm,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "spring"),
            Self::Thunderstorm => write!(f, "thunderstorm"),
        }
    }
}

/// Running totals for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Point total (may go negative)
    pub points: i64,
    /// Carbon score total
    pub carbon_score: u64,
    /// Trees saved total
    pub trees_saved: u64,
    /// Water saved total, in liters
    pub water_saved: u64,
    /// Leaderboard rank (1 = best)
    pub rank: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            points: 0,
            carbon_score: 0,
            trees_saved: 0,
            water_saved: 0,
            rank: 1,
        }
    }
}

impl Metrics {
    /// Return the aggregate with `delta` added
    ///
    /// Pure accumulation: rank is untouched, missing metric fields add zero.
    #[must_use]
    pub fn apply(self, delta: &ScoreDelta) -> Self {
        let add =
            |total: u64, value: Option<u32>| total.saturating_add(u64::from(value.unwrap_or(0)));

        Self {
            points: self.points.saturating_add(delta.points),
            carbon_score: add(self.carbon_score, delta.metrics.carbon_score),
            trees_saved: add(self.trees_saved, delta.metrics.trees_saved),
            water_saved: add(self.water_saved, delta.metrics.water_saved),
            rank: self.rank,
        }
    }

    /// Whether the rank is within the top users
    #[must_use]
    pub const fn is_top_user(&self) -> bool {
        self.rank <= TOP_USER_RANK
    }

    /// Theme for the current rank
    #[must_use]
    pub const fn theme(&self) -> Theme {
        if self.is_top_user() {
            Theme::Spring
        } else {
            Theme::Thunderstorm
        }
    }
}
