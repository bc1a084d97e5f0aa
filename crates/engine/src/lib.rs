//! Sociograph Engine library.
//!
//! The user/relationship data-access and consistency layer over Neo4j.
//!
//! ## Structure
//!
//! - `infrastructure/` - port traits and the Neo4j adapters behind them
//! - `config` - store connection settings from the environment
//! - `app` - application composition (connect, register schema, build repos)
//!
//! There is no HTTP surface here: a routing layer consumes [`App`] and the
//! port traits it exposes.

pub mod app;
pub mod config;
pub mod infrastructure;

/// E2E integration tests using real Neo4j via testcontainers.
#[cfg(test)]
mod e2e_tests;

pub use app::{App, StartupError};
