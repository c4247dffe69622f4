//! CLI entry point for node-select-rs.

use clap::Parser;
use cli::CliConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let config = CliConfig::parse();
    config.run()
}
