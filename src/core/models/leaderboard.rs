//! Leaderboard model

use serde::{Deserialize, Serialize};

use super::Icon;

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Total score
    pub score: u64,

    /// Position, 1 = best
    pub rank: u32,

    /// Avatar image URL
    pub avatar: String,

    /// Whether this row is the signed-in user
    #[serde(default)]
    pub is_current_user: bool,
}

/// Ranked list of users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Build a leaderboard; entries are kept sorted by rank
    #[must_use]
    pub fn new(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by_key(|e| e.rank);
        Self { entries }
    }

    /// Entries ordered by rank
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The signed-in user's row, if present
    #[must_use]
    pub fn current_user(&self) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.is_current_user)
    }
}

/// Icon for a rank: crown, medal and award for the podium, trophy otherwise
#[must_use]
pub const fn rank_icon(rank: u32) -> Icon {
    match rank {
        1 => Icon::Crown,
        2 => Icon::Medal,
        3 => Icon::Award,
        _ => Icon::Trophy,
    }
}
