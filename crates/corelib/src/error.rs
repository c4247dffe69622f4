//! Error types for the core library.
//!
//! Selection itself never errors: fewer eligible nodes than requested is a
//! normal outcome signaled by a short result. The only fallible operations
//! here are at the decoding boundary.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Node id text was not valid hex.
    #[error("invalid node id {0:?}: expected up to 32 hex digits")]
    InvalidNodeId(String),
}
