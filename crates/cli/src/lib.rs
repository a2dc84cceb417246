//! CLI tool for inspecting token-range ownership.
//!
//! Provides commands for:
//! - Computing the ranges owned by one instance
//! - Looking up the owner of a token
//! - Printing the partition of the whole ring
//! - Validating a ring snapshot

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::{CliConfig, Format, Width};
