//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use ecotrack::output::OutputMode;

/// ecotrack - Eco task completion and scoring
#[derive(Parser, Debug)]
#[command(
    name = "ecotrack",
    version,
    about = "Eco task completion and scoring",
    long_about = "Complete daily eco tasks by submitting photo or video evidence.\n\n\
                  The first two uploads of a session earn a task's points, the next two\n\
                  deduct them, and later uploads score nothing. Metrics always count."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Task catalog file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or inspect daily tasks
    Tasks {
        #[command(subcommand)]
        action: Option<TaskAction>,
    },

    /// Submit evidence for one or more tasks in a single session
    Submit {
        /// Submissions as TASK_ID=PATH, processed in order
        #[arg(required = true, value_name = "TASK_ID=PATH", value_parser = parse_submission)]
        submissions: Vec<(String, PathBuf)>,
    },

    /// List or join challenges
    Challenges {
        #[command(subcommand)]
        action: Option<ChallengeAction>,
    },

    /// Show the leaderboard
    Leaderboard,

    /// Show dashboard metrics, rank and theme
    Status,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks
    List,

    /// Show one task
    Show {
        /// Task ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChallengeAction {
    /// List challenges
    List,

    /// Join a challenge
    Join {
        /// Challenge ID
        id: String,
    },
}

/// Parse a `TASK_ID=PATH` argument
fn parse_submission(arg: &str) -> Result<(String, PathBuf), String> {
    let (id, path) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TASK_ID=PATH, got '{arg}'"))?;

    if id.trim().is_empty() {
        return Err(format!("missing task id in '{arg}'"));
    }
    if path.is_empty() {
        return Err(format!("missing evidence path in '{arg}'"));
    }
    Ok((id.trim().to_string(), PathBuf::from(path)))
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let catalog = cli.catalog.as_deref();

    match cli.command {
        Some(Command::Tasks { action }) => {
            commands::tasks(action.unwrap_or(TaskAction::List), catalog, output_mode)
        },
        Some(Command::Submit { submissions }) => {
            commands::submit(&submissions, catalog, output_mode)
        },
        Some(Command::Challenges { action }) => {
            commands::challenges(action.unwrap_or(ChallengeAction::List), output_mode)
        },
        Some(Command::Leaderboard) => commands::leaderboard(output_mode),
        Some(Command::Status) => commands::status(catalog, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ecotrack::VERSION
                    })
                );
            } else {
                println!("ecotrack v{}", ecotrack::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ecotrack::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ecotrack v{}", ecotrack::VERSION);
                println!("\nRun 'ecotrack --help' for usage");
                println!("Run 'ecotrack tasks' to see today's tasks");
            }
            Ok(())
        },
    }
}
