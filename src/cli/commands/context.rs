//! Shared setup for commands: config, catalog, session and detector

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use ecotrack::adapters::memory::{InMemoryTaskRepository, default_leaderboard};
use ecotrack::adapters::{ConfiguredIdentity, DisabledDetector};
use ecotrack::config::{Config, VisionConfig};
use ecotrack::core::ports::LabelDetector;
use ecotrack::core::services::{SessionContext, TaskLedger};

/// Open the task ledger
///
/// `--catalog` wins over the config file; without either the built-in
/// catalog is used.
pub fn open_ledger(catalog: Option<&Path>, config: &Config) -> anyhow::Result<TaskLedger> {
    let path = catalog.or(config.catalog.as_deref());

    let repo = match path {
        Some(path) => ecotrack::adapters::toml::load_repository(path)
            .with_context(|| format!("Failed to load task catalog {}", path.display()))?,
        None => InMemoryTaskRepository::seeded(),
    };

    Ok(TaskLedger::new(Box::new(repo))?)
}

/// A fresh session with its rank taken from the leaderboard
pub fn start_session() -> SessionContext {
    let mut session = SessionContext::new();
    if let Some(rank) = session.sync_rank(&default_leaderboard()) {
        log::debug!("Session rank synced to #{rank}");
    }
    session
}

/// The identity for this process
pub fn identity(config: &Config) -> ConfiguredIdentity {
    ConfiguredIdentity::resolve(config.session.user.as_deref())
}

/// Whether submissions will be sent for label detection
pub fn vision_enabled(config: &VisionConfig) -> bool {
    cfg!(feature = "vision") && config.has_api_key()
}

/// Pick the label detector for this run
#[cfg(feature = "vision")]
pub fn detector(config: &VisionConfig) -> anyhow::Result<Arc<dyn LabelDetector>> {
    if vision_enabled(config) {
        let detector = ecotrack::adapters::GoogleVisionDetector::new(config)?;
        return Ok(Arc::new(detector));
    }

    log::info!("{} not set, label detection disabled", config.api_key_env);
    Ok(Arc::new(DisabledDetector))
}

/// Pick the label detector for this run
#[cfg(not(feature = "vision"))]
pub fn detector(_config: &VisionConfig) -> anyhow::Result<Arc<dyn LabelDetector>> {
    log::info!("Built without the vision feature, label detection disabled");
    Ok(Arc::new(DisabledDetector))
}
