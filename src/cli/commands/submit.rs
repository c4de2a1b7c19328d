//! Submit command - upload evidence for tasks within one session

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use ecotrack::config::Config;
use ecotrack::core::models::{Evidence, guess_media_type};
use ecotrack::core::ports::IdentityProvider;
use ecotrack::core::services::{EvidenceSubmissionHandler, SessionContext, TaskLedger};
use ecotrack::output::{OutputMode, SubmissionReport, SubmitResult};

use super::context::{detector, identity, open_ledger, start_session};

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Submit evidence for each `(task id, path)` pair, in order
pub fn submit(
    submissions: &[(String, PathBuf)],
    catalog: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load();

    let Some(session_user) = identity(&config).current_session() else {
        bail!("Not signed in. Set ECOTRACK_USER or [session] user in {}", config_hint());
    };

    let mut ledger = open_ledger(catalog, &config)?;
    let mut session = start_session();
    let handler = EvidenceSubmissionHandler::new(detector(&config.vision)?);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let reports = runtime.block_on(submit_all(&handler, &mut ledger, &mut session, submissions));

    let metrics = session.metrics();
    let result = SubmitResult {
        user: session_user.user,
        submissions: reports,
        metrics,
        theme: metrics.theme(),
    };
    result.render(mode);

    let failures = result.failures();
    if failures > 0 {
        bail!("{failures} of {} submission(s) rejected", result.submissions.len());
    }
    Ok(())
}

async fn submit_all(
    handler: &EvidenceSubmissionHandler,
    ledger: &mut TaskLedger,
    session: &mut SessionContext,
    submissions: &[(String, PathBuf)],
) -> Vec<SubmissionReport> {
    let mut reports = Vec::with_capacity(submissions.len());

    for (task_id, path) in submissions {
        let file = path.display().to_string();
        let result = match read_evidence(path) {
            Ok(evidence) => handler
                .submit(ledger, session, task_id, evidence)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("{e:#}")),
        };

        let report = match result {
            Ok(outcome) => SubmissionReport {
                task_id: task_id.clone(),
                file,
                outcome: Some(outcome),
                error: None,
            },
            Err(error) => {
                log::warn!("Submission for task {task_id} rejected: {error}");
                SubmissionReport {
                    task_id: task_id.clone(),
                    file,
                    outcome: None,
                    error: Some(error),
                }
            },
        };
        reports.push(report);
    }

    reports
}

/// Read an evidence file, inferring its media type from the extension
fn read_evidence(path: &Path) -> anyhow::Result<Evidence> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let media_type = guess_media_type(&file_name).unwrap_or(UNKNOWN_MEDIA_TYPE);

    Ok(Evidence::new(file_name, media_type, bytes))
}

fn config_hint() -> String {
    Config::config_path().display().to_string()
}
