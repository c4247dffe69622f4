//! Selector abstractions.
//!
//! A selector produces a bounded, deduplicated, randomly-ordered subset of
//! candidate nodes satisfying the caller's criteria. Two strategies exist,
//! differing in what the unit of fairness is:
//!
//! - **SelectById**: nodes — every node is equally likely to be chosen.
//! - **SelectBySubnet**: subnets — every failure domain is equally likely,
//!   no matter how many nodes it contains, and at most one node per subnet
//!   is returned per call.

pub mod by_id;
pub mod by_subnet;

pub use by_id::SelectById;
pub use by_subnet::{SelectBySubnet, Subnet};

use corelib::{Criteria, Node};

/// Trait for node-selection strategies.
///
/// A selector is built once from a snapshot of candidate nodes and used for
/// as long as that snapshot is considered fresh, then discarded and rebuilt.
/// It never mutates its snapshot; `select` returns owned copies so callers
/// can annotate results freely.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync) as a selector may be
/// shared by concurrent upload requests.
pub trait Selector: Send + Sync + 'static {
    /// Maximum number of candidate groups a call could ever return from:
    /// the node count for [`SelectById`], the distinct-subnet count for
    /// [`SelectBySubnet`]. Lets callers decide upfront whether a request
    /// for `n` nodes is even theoretically satisfiable.
    fn count(&self) -> usize;

    /// Select up to `n` distinct nodes satisfying `criteria`.
    ///
    /// Returns owned clones; mutating them never affects the selector.
    /// `n == 0` is a defined no-op returning an empty Vec. Fewer than `n`
    /// eligible candidates is NOT an error — the result is simply shorter,
    /// and callers owning a minimum requirement must check `result.len()`
    /// themselves.
    fn select(&self, n: usize, criteria: &dyn Criteria) -> Vec<Node>;

    /// Strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
