//! Identity provider fed by configuration

use crate::core::ports::{IdentityProvider, Session};

/// Environment variable naming the signed-in user
pub const USER_ENV: &str = "ECOTRACK_USER";

/// Session taken from `ECOTRACK_USER` or the `[session]` config section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredIdentity {
    user: Option<String>,
}

impl ConfiguredIdentity {
    /// Identity for a fixed user; blank names count as signed out
    #[must_use]
    pub fn new(user: Option<String>) -> Self {
        Self { user: user.filter(|u| !u.trim().is_empty()) }
    }

    /// Resolve the user, preferring the environment over config
    #[must_use]
    pub fn resolve(configured: Option<&str>) -> Self {
        let from_env = std::env::var(USER_ENV).ok().filter(|u| !u.trim().is_empty());
        Self::new(from_env.or_else(|| configured.map(str::to_string)))
    }
}

impl IdentityProvider for ConfiguredIdentity {
    fn current_session(&self) -> Option<Session> {
        self.user.as_ref().map(|user| Session { user: user.clone() })
    }
}
