//! Problem representation shared by every search strategy.
//!
//! - [`CostMatrix`]: node-indexed edge costs, possibly sparse or asymmetric
//! - [`CostModel`]: closed-tour costing under a [`CostPolicy`]
//! - [`factory`]: random permutation tours and validity checks
//! - [`neighbor`]: pairwise-swap neighborhoods for local search
//! - [`SearchResult`]: outcome of a local-search run

mod cost;
pub mod factory;
mod matrix;
pub mod neighbor;
mod result;

pub use cost::{CostModel, CostPolicy};
pub use factory::{is_valid_tour, random_population, random_tour, validate_tour};
pub use matrix::CostMatrix;
pub use result::SearchResult;

/// An ordered sequence of node indices read as a cycle: the last node
/// connects back to the first.
pub type Tour = Vec<usize>;
