//! Genetic search over permutation tours.
//!
//! Each generation scores the population by normalized inverse cost,
//! selects parents, recombines them with an order-preserving crossover,
//! swap-mutates and repairs the children, then keeps the elite slice of the
//! current population and fills the rest with the best offspring.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population size, generations, operator rates, presets
//! - [`GeneticRunner`]: executes the generational loop
//! - [`GeneticResult`]: initial and final best tours plus progress entries
//!
//! # Submodules
//!
//! - [`operators`]: order crossover variants, swap mutation, permutation repair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GeneticConfig;
pub use operators::Crossover;
pub use runner::{GenerationProgress, GeneticResult, GeneticRunner};
pub use selection::Selection;
pub use types::{Individual, Population};
