//! Challenge board

use crate::core::error::LedgerError;
use crate::core::models::Challenge;

/// The challenge catalog
#[derive(Debug, Clone, Default)]
pub struct ChallengeBoard {
    challenges: Vec<Challenge>,
}

impl ChallengeBoard {
    /// Create a board over a catalog
    #[must_use]
    pub const fn new(challenges: Vec<Challenge>) -> Self {
        Self { challenges }
    }

    /// Challenges in catalog order
    #[must_use]
    pub fn list_challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Join a challenge, returning the notice to show
    ///
    /// Joining is informational only; no points or metrics change.
    pub fn join_challenge(&self, id: &str) -> Result<String, LedgerError> {
        self.challenges
            .iter()
            .find(|c| c.id == id)
            .map(Challenge::join_message)
            .ok_or_else(|| LedgerError::ChallengeNotFound(id.to_string()))
    }
}
