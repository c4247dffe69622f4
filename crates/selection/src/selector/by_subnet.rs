//! Uniform-by-subnet selection.
//!
//! Subnets — proxies for physical network locations and failure domains —
//! are the unit of fairness here, not individual nodes. A subnet with 50
//! nodes must not get 50× the selection probability of a subnet with one
//! node, otherwise large operators dominate piece placement and undermine
//! the durability guarantee that depends on independent failure domains.
//!
//! # Algorithm
//!
//! 1. Construction groups the snapshot by `last_net`; every node is kept.
//! 2. Each call permutes the subnet list uniformly at random.
//! 3. For each subnet in permutation order, ONE member is drawn uniformly
//!    at random (an independent draw per subnet).
//! 4. If that drawn node fails the criteria, the whole subnet is skipped
//!    for this call. There is no second draw from the same subnet: trying
//!    alternates would interact unpredictably with caller retry logic, so
//!    the strategy under-fills rather than weaken the one-node-per-subnet
//!    guarantee.
//! 5. Stop at `n` selections or permutation exhaustion.
//!
//! # Invariants
//!
//! - No two returned nodes share a `last_net` within one call.
//! - `count()` is the distinct-subnet count: an upper bound on *diverse*
//!   selections, not on total nodes.

use std::collections::HashMap;

use corelib::{Criteria, Node};

use crate::random::{LockedRng, RandomSource};
use crate::selector::Selector;

/// One failure domain: a subnet key and every snapshot node inside it.
#[derive(Clone, Debug)]
pub struct Subnet {
    pub net: String,
    pub nodes: Vec<Node>,
}

/// Selector giving every subnet equal selection probability and returning
/// at most one node per subnet.
pub struct SelectBySubnet {
    subnets: Vec<Subnet>,
    rng: Box<dyn RandomSource>,
}

impl SelectBySubnet {
    /// Group a snapshot of candidate nodes by `last_net`.
    ///
    /// The grouping is computed once, here; it is not refreshed on later
    /// `select` calls. Rebuild the selector when the node directory moves on.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        Self::from_nodes_with_random_source(nodes, Box::new(LockedRng::from_entropy()))
    }

    /// Like [`SelectBySubnet::from_nodes`] with an explicit randomness
    /// source, for deterministic selections in tests.
    pub fn from_nodes_with_random_source(nodes: &[Node], rng: Box<dyn RandomSource>) -> Self {
        // First-seen order keeps construction deterministic; each call
        // permutes anyway, so the stored order carries no meaning.
        let mut subnets: Vec<Subnet> = Vec::new();
        let mut index_by_net: HashMap<&str, usize> = HashMap::new();
        for node in nodes {
            match index_by_net.get(node.last_net.as_str()) {
                Some(&i) => subnets[i].nodes.push(node.clone()),
                None => {
                    index_by_net.insert(node.last_net.as_str(), subnets.len());
                    subnets.push(Subnet {
                        net: node.last_net.clone(),
                        nodes: vec![node.clone()],
                    });
                }
            }
        }
        Self { subnets, rng }
    }

    /// The grouped view of the snapshot.
    pub fn subnets(&self) -> &[Subnet] {
        &self.subnets
    }
}

impl Selector for SelectBySubnet {
    fn count(&self) -> usize {
        self.subnets.len()
    }

    fn select(&self, n: usize, criteria: &dyn Criteria) -> Vec<Node> {
        if n == 0 || self.subnets.is_empty() {
            return Vec::new();
        }

        let mut selected = Vec::with_capacity(n.min(self.subnets.len()));
        for idx in self.rng.permutation(self.subnets.len()) {
            let subnet = &self.subnets[idx];
            // Subnets are never empty by construction.
            let node = &subnet.nodes[self.rng.index(subnet.nodes.len())];
            if !criteria.match_include(node) {
                // The whole subnet sits out this call; no second draw.
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
        "SelectBySubnet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::{ExcludeIds, MatchAll, NodeId};

    fn node(id: u128, net: &str) -> Node {
        Node::new(NodeId(id), net)
    }

    #[test]
    fn test_grouping_keeps_every_node() {
        let selector = SelectBySubnet::from_nodes(&[
            node(1, "a"),
            node(2, "a"),
            node(3, "b"),
            node(4, "a"),
        ]);
        assert_eq!(selector.count(), 2);
        let total: usize = selector.subnets().iter().map(|s| s.nodes.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_zero_n_is_noop() {
        let selector = SelectBySubnet::from_nodes(&[node(1, "a")]);
        assert!(selector.select(0, &MatchAll).is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let selector = SelectBySubnet::from_nodes(&[]);
        assert_eq!(selector.count(), 0);
        assert!(selector.select(5, &MatchAll).is_empty());
    }

    #[test]
    fn test_one_node_per_subnet() {
        // Two subnets of two nodes each: any select(2) must return exactly
        // one node from each.
        let selector = SelectBySubnet::from_nodes(&[
            node(1, "a"),
            node(2, "a"),
            node(3, "b"),
            node(4, "b"),
        ]);
        for _ in 0..100 {
            let result = selector.select(2, &MatchAll);
            assert_eq!(result.len(), 2);
            assert_ne!(result[0].last_net, result[1].last_net);
        }
    }

    #[test]
    fn test_bounded_by_subnet_count() {
        let selector =
            SelectBySubnet::from_nodes(&[node(1, "a"), node(2, "b"), node(3, "c")]);
        let result = selector.select(5, &MatchAll);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_rejected_draw_skips_whole_subnet() {
        // Single subnet where every member is excluded: nothing can come
        // back no matter how often we ask.
        let selector = SelectBySubnet::from_nodes(&[node(1, "a"), node(2, "a")]);
        let excluded = ExcludeIds::new([NodeId(1), NodeId(2)]);
        for _ in 0..50 {
            assert!(selector.select(1, &excluded).is_empty());
        }
    }

    #[test]
    fn test_no_retry_within_subnet() {
        // One subnet, one of two members excluded. Some calls draw the
        // excluded node and must come back empty — the strategy never
        // falls back to the sibling. The excluded node itself must never
        // appear.
        let selector = SelectBySubnet::from_nodes_with_random_source(
            &[node(1, "a"), node(2, "a")],
            Box::new(crate::random::LockedRng::seeded(7)),
        );
        let excluded = ExcludeIds::new([NodeId(1)]);

        let mut empties = 0;
        for _ in 0..400 {
            let result = selector.select(1, &excluded);
            match result.as_slice() {
                [] => empties += 1,
                [only] => assert_eq!(only.id, NodeId(2)),
                more => panic!("expected at most one node, got {}", more.len()),
            }
        }
        // The excluded member is drawn about half the time.
        assert!((100..300).contains(&empties), "empties = {}", empties);
    }

    #[test]
    fn test_clone_isolation() {
        let selector = SelectBySubnet::from_nodes(&[node(1, "a"), node(2, "b")]);
        let mut result = selector.select(2, &MatchAll);
        result[0].last_net = "mutated".into();

        let again = selector.select(2, &MatchAll);
        assert!(again.iter().all(|n| n.last_net != "mutated"));
    }
}
