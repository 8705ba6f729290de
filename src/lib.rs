//! Metaheuristic search for low-cost closed tours over a weighted graph.
//!
//! Four interchangeable strategies share one problem representation, a
//! [`CostMatrix`](tour::CostMatrix) and permutation [`Tour`](tour::Tour)s:
//!
//! - **Genetic search ([`ga`])**: population-based, with roulette or
//!   tournament selection, order crossover, swap mutation, permutation
//!   repair, and elitist replacement.
//! - **Steepest-ascent hill climbing ([`hc`])**: moves to the best swap
//!   neighbor until none improves.
//! - **Tolerant hill climbing ([`tolerant`])**: one random swap neighbor per
//!   iteration, stopping after a run of non-improving draws.
//! - **Simulated annealing ([`sa`])**: Boltzmann acceptance with a cooling
//!   schedule, returning the best tour visited.
//!
//! # Cost policies
//!
//! The genetic search costs tours under
//! [`CostPolicy::Strict`](tour::CostPolicy::Strict): a missing edge makes a
//! tour cost `+∞`. The local searches use
//! [`CostPolicy::Lenient`](tour::CostPolicy::Lenient), where a missing edge
//! costs nothing.
//!
//! # Execution
//!
//! Every runner is a synchronous loop. `run` blocks until the search ends;
//! `run_with_cancel` also polls a shared [`CancelFlag`] at each generation,
//! pass, or iteration and returns the best state so far when it is set.
//! Progress callbacks of the genetic search are notifications only.

pub mod cancel;
pub mod error;
pub mod ga;
pub mod hc;
pub mod random;
pub mod sa;
pub mod tolerant;
pub mod tour;

pub use cancel::CancelFlag;
pub use error::{Result, SearchError};
