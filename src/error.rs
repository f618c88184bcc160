//! Crate error type.

use thiserror::Error as ThisError;

/// Errors surfaced by matrix access and the search engine.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Matrix or tour access outside the instance dimension.
    #[error("index ({row}, {col}) is out of bounds for a {dim}x{dim} matrix")]
    Index { row: usize, col: usize, dim: usize },
    /// A move referenced a node value that is not in the tour. The tour
    /// is always a permutation of the node set, so this is an invariant
    /// violation rather than a recoverable condition.
    #[error("node {node} is not present in the tour")]
    InvalidMove { node: usize },
    /// Rejected at construction: zero dimension, zero tabu capacity,
    /// zero time budget, or a malformed matrix shape.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
