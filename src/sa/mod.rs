//! Simulated Annealing (SA).
//!
//! A single-tour trajectory search. Each iteration draws one random swap
//! neighbor and accepts it if it is cheaper, or otherwise with probability
//! `exp(-Δ / T)`. The temperature cools once per iteration, accepted or
//! not, and the search ends when it is no longer above the minimum. The
//! best tour ever visited is returned.
//!
//! Costs use [`CostPolicy::Lenient`](crate::tour::CostPolicy::Lenient).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{AnnealingConfig, CoolingSchedule};
pub use runner::{AnnealingResult, AnnealingRunner};
