//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory/` - In-memory task repository and the built-in catalogs
//! - `toml/` - Task catalog files
//! - `vision` - Google Cloud Vision label detection (feature `vision`)
//! - `disabled` - Label detector for when no vision service is configured
//! - `identity` - Session from environment or config

pub mod disabled;
pub mod identity;
pub mod memory;
pub mod toml;
#[cfg(feature = "vision")]
pub mod vision;

pub use disabled::DisabledDetector;
pub use identity::ConfiguredIdentity;
pub use memory::InMemoryTaskRepository;
#[cfg(feature = "vision")]
pub use vision::GoogleVisionDetector;
