//! CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use corelib::{ExcludeIds, Node, NodeId};
use selection::{LockedRng, RandomSource, SelectById, SelectBySubnet, Selector};

pub type CommandResult = anyhow::Result<()>;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Select nodes for an upload placement from a snapshot file.
    Select {
        /// Path to a JSON array of node records.
        #[arg(long)]
        snapshot: PathBuf,
        /// How many nodes to request.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Give every subnet equal probability instead of every node.
        #[arg(long)]
        by_subnet: bool,
        /// Node ids (hex) to exclude, e.g. nodes already holding a piece.
        #[arg(long)]
        exclude: Vec<NodeId>,
        /// Seed the random source for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a snapshot's node and subnet counts.
    Inspect {
        /// Path to a JSON array of node records.
        #[arg(long)]
        snapshot: PathBuf,
    },
}

impl Command {
    pub fn execute(self) -> CommandResult {
        match self {
            Command::Select {
                snapshot,
                count,
                by_subnet,
                exclude,
                seed,
            } => select(&snapshot, count, by_subnet, exclude, seed),
            Command::Inspect { snapshot } => inspect(&snapshot),
        }
    }
}

fn load_snapshot(path: &Path) -> anyhow::Result<Vec<Node>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let nodes: Vec<Node> =
        serde_json::from_str(&data).context("snapshot is not a JSON array of node records")?;
    Ok(nodes)
}

fn select(
    snapshot: &Path,
    count: usize,
    by_subnet: bool,
    exclude: Vec<NodeId>,
    seed: Option<u64>,
) -> CommandResult {
    let nodes = load_snapshot(snapshot)?;
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(LockedRng::seeded(seed)),
        None => Box::new(LockedRng::from_entropy()),
    };
    let selector: Box<dyn Selector> = if by_subnet {
        Box::new(SelectBySubnet::from_nodes_with_random_source(&nodes, rng))
    } else {
        Box::new(SelectById::with_random_source(&nodes, rng))
    };

    tracing::debug!(
        strategy = selector.name(),
        candidates = selector.count(),
        requested = count,
        "selecting"
    );

    let criteria = ExcludeIds::new(exclude);
    let selected = selector.select(count, &criteria);
    if selected.len() < count {
        tracing::warn!(
            requested = count,
            returned = selected.len(),
            "fewer eligible nodes than requested"
        );
    }
    for node in &selected {
        println!(
            "{} {} {}",
            node.id,
            node.last_net,
            node.address.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn inspect(snapshot: &Path) -> CommandResult {
    let nodes = load_snapshot(snapshot)?;
    let grouped = SelectBySubnet::from_nodes(&nodes);
    println!("nodes:   {}", nodes.len());
    println!("subnets: {}", grouped.count());
    for subnet in grouped.subnets() {
        println!("  {} ({} nodes)", subnet.net, subnet.nodes.len());
    }
    Ok(())
}
