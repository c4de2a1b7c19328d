//! TOML parser for task catalog files
//!
//! Handles reading and deserializing `[[task]]` catalogs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{Icon, MetricDeltas, Task};

/// Errors raised while loading a task catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or has the wrong shape
    #[error("failed to parse catalog")]
    Parse(#[from] toml::de::Error),

    /// The catalog parsed but its content is unusable
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// A task catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Tasks in catalog order
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskEntry>,
}

/// A `[[task]]` entry
#[derive(Debug, Deserialize)]
pub struct TaskEntry {
    /// Task identifier, unique within the catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Base points
    pub points: u32,

    /// Icon name, e.g. "trash"
    #[serde(default)]
    pub icon: Option<String>,

    /// Metric deltas applied on completion
    #[serde(default)]
    pub metrics: MetricDeltas,
}

impl TaskEntry {
    fn into_task(self) -> Result<Task, CatalogError> {
        let icon = match self.icon.as_deref() {
            Some(name) => name
                .parse::<Icon>()
                .map_err(|e| CatalogError::Invalid(format!("task {}: {e}", self.id)))?,
            None => Icon::default(),
        };

        Ok(Task::new(self.id, self.name, self.description, self.points)
            .with_icon(icon)
            .with_metrics(self.metrics))
    }
}

/// Parse a catalog from TOML text
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog, if it declares no
/// tasks, or if a task id is empty or repeated.
pub fn parse_catalog(content: &str) -> Result<Vec<Task>, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;

    if file.tasks.is_empty() {
        return Err(CatalogError::Invalid("no [[task]] entries".to_string()));
    }

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(file.tasks.len());
    for entry in file.tasks {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::Invalid("task with empty id".to_string()));
        }
        if !seen.insert(entry.id.clone()) {
            return Err(CatalogError::Invalid(format!("duplicate task id: {}", entry.id)));
        }
        tasks.push(entry.into_task()?);
    }

    log::debug!("Parsed catalog with {} tasks", tasks.len());
    Ok(tasks)
}

/// Load a catalog from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Vec<Task>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&content)
}
