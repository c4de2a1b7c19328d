//! Core domain logic for ecotrack
//!
//! This module contains the business logic. All external interactions are
//! abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Evidence, Metrics, Challenge, Leaderboard)
//! - `services/` - Business logic orchestration (ledger, scoring, submission)
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Ledger error type shared by ports and services

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
