//! Core library for upload node selection.
//!
//! This crate provides the fundamental abstractions the selection strategies
//! consume:
//! - Node identity and subnet placement metadata
//! - Inclusion criteria (the per-call eligibility predicate)
//! - Error types for decoding node identifiers

pub mod criteria;
pub mod error;
pub mod node;

pub use criteria::{Criteria, ExcludeIds, MatchAll};
pub use error::{Error, Result};
pub use node::{Node, NodeId};
