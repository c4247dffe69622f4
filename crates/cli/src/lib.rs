//! CLI tool for exercising node selection against snapshot files.
//!
//! Provides commands for:
//! - Running a selection over a JSON node snapshot
//! - Inspecting a snapshot's subnet layout

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
