//! Challenges command - list and join challenges

use ecotrack::adapters::memory::default_challenges;
use ecotrack::core::services::ChallengeBoard;
use ecotrack::output::{ChallengeListResult, OperationResult, OutputMode};

use crate::cli::app::ChallengeAction;

/// Handle `challenges` subcommands
pub fn challenges(action: ChallengeAction, mode: OutputMode) -> anyhow::Result<()> {
    let board = ChallengeBoard::new(default_challenges());

    match action {
        ChallengeAction::List => {
            let result = ChallengeListResult {
                challenges: board.list_challenges().to_vec(),
            };
            result.render(mode);
        },
        ChallengeAction::Join { id } => {
            let message = board.join_challenge(&id)?;
            OperationResult {
                success: true,
                message,
            }
            .render(mode);
        },
    }

    Ok(())
}
