//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (task storage, label detection, identity).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so a real persistence backend or a different labeling
//! service can be swapped in without touching scoring.

mod identity;
mod label_detector;
mod task_repo;

pub use identity::{IdentityProvider, Session};
pub use label_detector::{DetectError, LabelDetector, LabelFuture};
#[cfg(test)]
pub use task_repo::MockTaskRepository;
pub use task_repo::TaskRepository;
