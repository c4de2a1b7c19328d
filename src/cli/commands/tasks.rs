//! Tasks command - list and inspect daily tasks

use std::path::Path;

use ecotrack::config::Config;
use ecotrack::output::{OutputMode, TaskListResult, TaskShowResult};

use super::context::open_ledger;
use crate::cli::app::TaskAction;

/// Handle `tasks` subcommands
pub fn tasks(action: TaskAction, catalog: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let ledger = open_ledger(catalog, &config)?;

    match action {
        TaskAction::List => {
            let result = TaskListResult {
                tasks: ledger.list_tasks()?,
                summary: ledger.summary()?,
            };
            result.render(mode);
        },
        TaskAction::Show { id } => {
            let result = TaskShowResult {
                task: ledger.get_task(&id)?,
            };
            result.render(mode);
        },
    }

    Ok(())
}
