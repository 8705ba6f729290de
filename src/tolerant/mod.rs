//! Tolerant (patience-bounded) stochastic hill climbing.
//!
//! Each iteration draws one random swap neighbor and moves to it only if it
//! is strictly cheaper. The search ends after a configured number of
//! consecutive non-improving draws. Unlike simulated annealing it never
//! accepts a worse tour.
//!
//! Costs use [`CostPolicy::Lenient`](crate::tour::CostPolicy::Lenient).

mod config;
mod runner;

pub use config::TolerantConfig;
pub use runner::TolerantRunner;
