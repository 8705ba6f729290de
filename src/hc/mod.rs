//! Steepest-ascent hill climbing over pairwise swaps.
//!
//! Each pass evaluates all `n·(n-1)/2` swap neighbors of the current tour
//! and moves to the cheapest one if it improves on the current cost. The
//! search halts at the first pass with no improving neighbor, so the
//! returned tour is a local optimum of the swap neighborhood.
//!
//! Costs use [`CostPolicy::Lenient`](crate::tour::CostPolicy::Lenient).
//! The search is deterministic and takes no configuration.

mod runner;

pub use runner::HillClimbingRunner;
