//! Status command - show the dashboard for a fresh session

use std::path::Path;

use ecotrack::config::Config;
use ecotrack::core::ports::IdentityProvider;
use ecotrack::output::{OutputMode, StatusResult};

use super::context::{identity, open_ledger, start_session, vision_enabled};

/// Show current metrics, rank and theme
pub fn status(catalog: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let ledger = open_ledger(catalog, &config)?;
    let metrics = start_session().metrics();

    let result = StatusResult {
        user: identity(&config).current_session().map(|s| s.user),
        metrics,
        top_user: metrics.is_top_user(),
        theme: metrics.theme(),
        tasks: ledger.summary()?,
        vision_enabled: vision_enabled(&config.vision),
    };
    result.render(mode);
    Ok(())
}
