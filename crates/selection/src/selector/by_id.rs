//! Uniform-by-node selection.
//!
//! Every node in the snapshot has equal selection probability regardless of
//! which subnet it sits in.
//!
//! # Algorithm
//!
//! 1. Generate one uniformly random permutation over the whole node list.
//! 2. Walk it in order, skipping nodes the criteria rejects.
//! 3. Stop at `n` accepted nodes or permutation exhaustion.
//!
//! One full permutation up front (rather than repeated independent draws)
//! guarantees every node is visited at most once per call, so duplicates are
//! impossible, while every node keeps an equal a-priori chance of being
//! chosen first, second, and so on. This is O(total nodes) per call
//! regardless of `n`; node snapshots in this domain are thousands of
//! entries, not millions.

use corelib::{Criteria, Node};

use crate::random::{LockedRng, RandomSource};
use crate::selector::Selector;

/// Selector giving every node equal selection probability.
pub struct SelectById {
    nodes: Vec<Node>,
    rng: Box<dyn RandomSource>,
}

impl SelectById {
    /// Build a selector over a snapshot of candidate nodes.
    ///
    /// The slice is copied; later changes to the caller's list are not
    /// observed. Rebuild the selector for a fresh view.
    pub fn new(nodes: &[Node]) -> Self {
        Self::with_random_source(nodes, Box::new(LockedRng::from_entropy()))
    }

    /// Like [`SelectById::new`] with an explicit randomness source, for
    /// deterministic selections in tests.
    pub fn with_random_source(nodes: &[Node], rng: Box<dyn RandomSource>) -> Self {
        Self {
            nodes: nodes.to_vec(),
            rng,
        }
    }
}

impl Selector for SelectById {
    fn count(&self) -> usize {
        self.nodes.len()
    }

    fn select(&self, n: usize, criteria: &dyn Criteria) -> Vec<Node> {
        if n == 0 || self.nodes.is_empty() {
            return Vec::new();
        }

        let mut selected = Vec::with_capacity(n.min(self.nodes.len()));
        for idx in self.rng.permutation(self.nodes.len()) {
            let node = &self.nodes[idx];
            if !criteria.match_include(node) {
                continue;
            }
            selected.push(node.clone());
            if selected.len() == n {
                break;
            }
        }

        if selected.len() < n {
            tracing::debug!(
                strategy = self.name(),
                requested = n,
                returned = selected.len(),
                "selection under-filled"
            );
        }
        selected
    }

    fn name(&self) -> &'static str {
        "SelectById"
    }
}
