//! Error types shared by every search strategy.
//!
//! Failures are boundary failures: a bad matrix, a malformed initial tour,
//! or an out-of-range parameter is rejected before a search starts. The
//! only mid-run failure is a degenerate genetic population whose fitness
//! cannot be normalized.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by cost models, tour factories, and runners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A search needs at least two nodes to form a cycle with a move.
    #[error("at least 2 nodes are required, got {nodes}")]
    TooFewNodes {
        /// Number of nodes supplied.
        nodes: usize,
    },

    /// A matrix row does not match the matrix dimension.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected row length (the node count).
        expected: usize,
    },

    /// A matrix entry is negative, NaN, or infinite.
    #[error("invalid cost {value} on edge {from} -> {to}")]
    InvalidCost {
        /// Source node.
        from: usize,
        /// Target node.
        to: usize,
        /// Rejected value.
        value: f64,
    },

    /// An initial tour is not a permutation of the matrix's nodes.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// What is wrong with the tour.
        reason: String,
    },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every individual has infinite cost, so fitness cannot be normalized.
    #[error("no valid tour in population")]
    DegeneratePopulation,
}
