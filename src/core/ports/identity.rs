//! Identity port
//!
//! Authentication lives in an external provider. The core only asks whether
//! somebody is signed in.

use serde::{Deserialize, Serialize};

/// A signed-in session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name or email of the user
    pub user: String,
}

/// Source of the current session
pub trait IdentityProvider: Send + Sync {
    /// The current session, if anyone is signed in
    fn current_session(&self) -> Option<Session>;

    /// Whether a session exists
    fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }
}
