//! Error types for the automaton engine.

use thiserror::Error;

/// Errors surfaced by the fallible engine operations.
///
/// Everything not listed here is total: out-of-range coordinates resolve
/// through the edge policy and empty positions read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cell type name was used that is not in the registry.
    #[error("unknown cell type: {0}")]
    UnknownType(String),

    /// Distribution population got no entry with a positive weight.
    #[error("distribution has no entries with positive weight")]
    EmptyDistribution,

    /// Negative grid dimensions, or an area overflowing `i64`, were supplied
    /// at construction.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
