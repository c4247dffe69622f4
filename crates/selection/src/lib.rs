//! Node-selection strategies for upload placement.
//!
//! This crate provides pluggable selectors that determine which storage
//! nodes receive the pieces of an uploaded object:
//!
//! - [`SelectById`]: every node has equal selection probability
//! - [`SelectBySubnet`]: every subnet has equal selection probability,
//!   enforcing one node per failure domain
//!
//! Under-fulfillment is not an error: `select` returns fewer nodes than
//! requested when not enough eligible candidates exist, and retry or
//! over-provisioning policy belongs to the caller.

pub mod random;
pub mod selector;

pub use random::{LockedRng, RandomSource};
pub use selector::{SelectById, SelectBySubnet, Selector, Subnet};
