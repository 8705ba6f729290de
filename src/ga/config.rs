//! Genetic search configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the generational loop.

use super::operators::Crossover;
use super::selection::Selection;
use crate::error::{Result, SearchError};

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use tour_metaheur::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.report_interval, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tour_metaheur::ga::{Crossover, GeneticConfig, Selection};
///
/// let config = GeneticConfig::default()
///     .with_population_size(60)
///     .with_selection(Selection::Tournament(2))
///     .with_crossover(Crossover::TwoPoint)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of tours in the population. Constant across generations.
    pub population_size: usize,

    /// Number of generations to run. Zero returns the initial best tour.
    pub generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover operator applied to selected parent pairs.
    pub crossover: Crossover,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    ///
    /// The elite count is `floor(population_size * elite_ratio)`. The best
    /// cost is non-increasing across generations only while that count is
    /// at least 1; with the default ratio, populations under 10 carry no
    /// elites and the best cost may regress.
    pub elite_ratio: f64,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied the children are copies of the parents.
    pub crossover_rate: f64,

    /// Probability of swap-mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Progress is reported every `report_interval` generations and on the
    /// final generation.
    pub report_interval: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 100,
            selection: Selection::default(),
            crossover: Crossover::default(),
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            report_interval: 20,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the reporting interval in generations.
    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio).floor() as usize
    }

    /// Preset for quick runs on small graphs.
    ///
    /// - Population: 20, Generations: 50, Report interval: 10
    pub fn fast() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            report_interval: 10,
            ..Self::default()
        }
    }

    /// Preset balancing tour quality and run time.
    ///
    /// - Population: 50, Generations: 200, Report interval: 20
    pub fn balanced() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            report_interval: 20,
            ..Self::default()
        }
    }

    /// Preset for larger graphs where quality matters more than time.
    ///
    /// - Population: 100, Generations: 500, Report interval: 50
    pub fn thorough() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            report_interval: 50,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(SearchError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.report_interval == 0 {
            return Err(SearchError::InvalidConfig(
                "report_interval must be at least 1".into(),
            ));
        }
        for (name, rate) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err(SearchError::InvalidConfig(
                "elite_ratio too high: elites fill entire population".into(),
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(SearchError::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
