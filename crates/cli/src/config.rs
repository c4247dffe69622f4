//! Top-level CLI configuration.

use clap::Parser;

use crate::commands::{Command, CommandResult};

/// Run node selection against a JSON snapshot of candidate nodes.
#[derive(Debug, Parser)]
#[command(name = "node-select", version, about)]
pub struct CliConfig {
    #[command(subcommand)]
    command: Command,
}

impl CliConfig {
    pub fn run(self) -> CommandResult {
        self.command.execute()
    }
}
