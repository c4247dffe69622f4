//! Inclusion criteria for a single selection call.
//!
//! A `Criteria` decides whether a candidate node may appear in the result of
//! one `select` call: exclusions (nodes already holding a piece of the same
//! upload), attribute filters, online-status filters. The predicate is
//! evaluated per node, independently, with no memory across calls — not
//! re-selecting the same node twice within one call is the selector's job.

use std::collections::HashSet;

use crate::node::{Node, NodeId};

/// Eligibility predicate over candidate nodes.
///
/// Implementations must be thread-safe (`Send + Sync`) as selectors may be
/// shared across threads.
pub trait Criteria: Send + Sync {
    /// Returns whether the node is eligible for this selection's results.
    fn match_include(&self, node: &Node) -> bool;
}

impl<F> Criteria for F
where
    F: Fn(&Node) -> bool + Send + Sync,
{
    fn match_include(&self, node: &Node) -> bool {
        self(node)
    }
}

/// Criteria that accepts every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl Criteria for MatchAll {
    fn match_include(&self, _node: &Node) -> bool {
        true
    }
}

/// Criteria that rejects a fixed set of node ids.
///
/// The common placement case: a piece of this upload already landed on those
/// nodes, so they must not receive another one.
#[derive(Debug, Clone, Default)]
pub struct ExcludeIds {
    ids: HashSet<NodeId>,
}

impl ExcludeIds {
    pub fn new(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Criteria for ExcludeIds {
    fn match_include(&self, node: &Node) -> bool {
        !self.ids.contains(&node.id)
    }
}
