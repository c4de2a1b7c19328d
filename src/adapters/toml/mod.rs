//! TOML-based task catalog
//!
//! Loads a task catalog from a `[[task]]` file into the in-memory
//! repository.
//!
//! - [`parser`] - Read and deserialize catalog files

pub mod parser;

use std::path::Path;

pub use parser::{CatalogError, CatalogFile, TaskEntry, load_catalog, parse_catalog};

use super::memory::InMemoryTaskRepository;

/// Build a task repository from a catalog file
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn load_repository(path: &Path) -> Result<InMemoryTaskRepository, CatalogError> {
    let tasks = load_catalog(path)?;
    log::info!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(InMemoryTaskRepository::new(tasks))
}
