//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each mixtape operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod migrate;

pub use migrate::{migrate, migrate_operation, MigrateOptions};
