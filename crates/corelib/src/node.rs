//! Node abstractions for upload placement.
//!
//! Nodes represent storage-node candidates at selection time. They are
//! identified by a compact `NodeId` that is cheap to compare and hash, and
//! carry the `last_net` subnet key used for failure-domain grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Compact identifier for a storage node.
///
/// Newtype over `u128` so comparisons and hashing are very fast while giving
/// plenty of space for uniqueness. Rendered as 32 hex digits in text form
/// (snapshots, CLI flags).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(pub u128);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u128::from_str_radix(s, 16)
            .map(NodeId)
            .map_err(|_| Error::InvalidNodeId(s.to_string()))
    }
}

impl TryFrom<String> for NodeId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

/// Storage-node candidate for piece placement.
///
/// Keep this struct small and cheap to clone; selections return owned copies
/// of it, and heavy mutable state (connections, reputation, metrics) lives
/// elsewhere. Attributes beyond `id` and `last_net` are opaque to the
/// selectors and only inspected through [`crate::Criteria`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Network subnet key (e.g. derived from the node's IP prefix). Nodes
    /// sharing `last_net` are treated as one failure domain; it must be
    /// non-empty for subnet grouping to be meaningful.
    pub last_net: String,
    /// Dial address, carried through for the placement consumer.
    #[serde(default)]
    pub address: Option<String>,
}

impl Node {
    /// Construct a new node with its subnet key.
    pub fn new(id: NodeId, last_net: impl Into<String>) -> Self {
        Self {
            id,
            last_net: last_net.into(),
            address: None,
        }
    }

    pub fn with_address(
        id: NodeId,
        last_net: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_net: last_net.into(),
            address: Some(address.into()),
        }
    }
}
