//! Leaderboard command

use ecotrack::adapters::memory::default_leaderboard;
use ecotrack::output::{LeaderboardResult, OutputMode};

/// Show the leaderboard
pub fn leaderboard(mode: OutputMode) -> anyhow::Result<()> {
    let result = LeaderboardResult {
        entries: default_leaderboard().entries().to_vec(),
    };
    result.render(mode);
    Ok(())
}
