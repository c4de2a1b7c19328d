//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Challenge, LeaderboardEntry, Metrics, Task, Theme, rank_icon};
use crate::core::services::{LedgerSummary, SubmissionOutcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn metrics_line(metrics: &Metrics) -> String {
    format!(
        "Points: {}  Carbon: {}  Water: {} L  Trees: {}  Rank: #{}",
        metrics.points,
        metrics.carbon_score,
        metrics.water_saved,
        metrics.trees_saved,
        metrics.rank
    )
}

/// Result of a task list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Tasks in catalog order
    pub tasks: Vec<Task>,
    /// Completed vs total
    pub summary: LedgerSummary,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Daily tasks ({}/{} completed):\n", self.summary.completed, self.summary.total);
        for task in &self.tasks {
            let mark = if task.is_completed() { "x" } else { " " };
            println!(
                "  [{mark}] {:<4} {} ({} pts, {})",
                task.id, task.name, task.points, task.icon
            );
        }
    }
}

/// Result of showing one task
#[derive(Debug, Serialize)]
pub struct TaskShowResult {
    /// The task
    pub task: Task,
}

impl TaskShowResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let task = &self.task;
        println!("{}: {}", task.id, task.name);
        if !task.description.is_empty() {
            println!("  {}", task.description);
        }
        println!("  Points: {}", task.points);
        println!("  Icon:   {}", task.icon);

        let metrics = &task.metrics;
        if let Some(carbon) = metrics.carbon_score {
            println!("  Carbon: +{carbon}");
        }
        if let Some(water) = metrics.water_saved {
            println!("  Water:  +{water} L");
        }
        if let Some(trees) = metrics.trees_saved {
            println!("  Trees:  +{trees}");
        }

        println!("  State:  {}", task.state);
        if let Some(evidence) = task.evidence() {
            println!("  Evidence: {evidence}");
        }
    }
}

/// One `TASK_ID=PATH` submission and what happened to it
#[derive(Debug, Serialize)]
pub struct SubmissionReport {
    /// Task the evidence was submitted for
    pub task_id: String,
    /// Evidence file
    pub file: String,
    /// Outcome when the submission was accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SubmissionOutcome>,
    /// Error when it was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a submit run
#[derive(Debug, Serialize)]
pub struct SubmitResult {
    /// Signed-in user
    pub user: String,
    /// Submissions in the order given
    pub submissions: Vec<SubmissionReport>,
    /// Metrics after the last submission
    pub metrics: Metrics,
    /// Dashboard theme for the rank
    pub theme: Theme,
}

impl SubmitResult {
    /// Number of rejected submissions
    #[must_use]
    pub fn failures(&self) -> usize {
        self.submissions.iter().filter(|s| s.error.is_some()).count()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        for report in &self.submissions {
            match (&report.outcome, &report.error) {
                (Some(outcome), _) => {
                    println!("[{}] {} <- {}", report.task_id, outcome.task.name, report.file);
                    for notice in &outcome.notices {
                        println!("    {notice}");
                    }
                },
                (None, Some(error)) => {
                    println!("[{}] {} rejected: {error}", report.task_id, report.file);
                },
                (None, None) => {},
            }
        }

        println!();
        println!("{}", metrics_line(&self.metrics));
        println!("Theme: {}", self.theme);
    }
}

/// Result of a challenge list operation
#[derive(Debug, Serialize)]
pub struct ChallengeListResult {
    /// Challenges in catalog order
    pub challenges: Vec<Challenge>,
}

impl ChallengeListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Challenges:\n");
        for c in &self.challenges {
            let status = if c.completed { "done" } else { "open" };
            println!("  [{}] {} ({} pts, {}, {status})", c.id, c.title, c.points, c.duration);
            println!("      {}", c.description);
            println!("      Progress: {}%\n", c.progress_percent());
        }
    }
}

/// Result of showing the leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardResult {
    /// Entries ordered by rank
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Leaderboard:\n");
        for entry in &self.entries {
            let you = if entry.is_current_user { "  (you)" } else { "" };
            println!(
                "  #{:<3} {:<8} {:<12} {:>6}{you}",
                entry.rank,
                rank_icon(entry.rank).as_str(),
                entry.name,
                entry.score
            );
        }
    }
}

/// Result of a status operation
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Signed-in user, if any
    pub user: Option<String>,
    /// Current metrics
    pub metrics: Metrics,
    /// Whether the rank is within the top users
    pub top_user: bool,
    /// Dashboard theme
    pub theme: Theme,
    /// Task completion counts
    pub tasks: LedgerSummary,
    /// Whether evidence images are sent for label detection
    pub vision_enabled: bool,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match &self.user {
            Some(user) => println!("Signed in as {user}"),
            None => println!("Not signed in"),
        }
        println!("{}", metrics_line(&self.metrics));
        let top = if self.top_user { " (top user)" } else { "" };
        println!("Theme: {}{top}", self.theme);
        println!("Tasks: {}/{} completed", self.tasks.completed, self.tasks.total);
        let vision = if self.vision_enabled { "enabled" } else { "disabled" };
        println!("Label detection: {vision}");
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
