//! Generational loop execution.
//!
//! [`GeneticRunner`] orchestrates the complete evolutionary process:
//! initialization → scoring → selection → crossover → mutation → repair →
//! elitist replacement → repeat.

use super::config::GeneticConfig;
use super::operators::{repair, swap_mutation};
use super::types::Population;
use crate::cancel::{is_cancelled, CancelFlag};
use crate::error::{Result, SearchError};
use crate::random::rng_from;
use crate::tour::{random_population, CostMatrix, CostModel, CostPolicy, Tour};
use log::{debug, trace};
use rand::Rng;
use std::time::{Duration, Instant};

/// Best cost observed at a reporting generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationProgress {
    /// Zero-based generation index.
    pub generation: usize,

    /// Best tour cost in the population after that generation.
    pub best_cost: f64,
}

/// Result of a genetic search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticResult {
    /// Best tour of the first sorted population, before any generation.
    pub initial_solution: Tour,

    /// Cost of `initial_solution`.
    pub initial_cost: f64,

    /// Best tour after the last generation executed.
    pub final_solution: Tour,

    /// Cost of `final_solution`.
    pub final_cost: f64,

    /// Entries recorded at every reporting generation.
    pub progress: Vec<GenerationProgress>,

    /// Number of generations executed.
    pub generations: usize,

    /// Best cost of the initial population followed by the best cost after
    /// each generation.
    pub cost_history: Vec<f64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Whether the run was stopped through its cancellation flag.
    pub cancelled: bool,
}

/// Executes the genetic search.
///
/// # Usage
///
/// ```
/// use tour_metaheur::ga::{GeneticConfig, GeneticRunner};
/// use tour_metaheur::tour::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let config = GeneticConfig::default().with_generations(20).with_seed(42);
/// let result = GeneticRunner::run(&matrix, &config).unwrap();
/// assert!(result.final_cost <= result.initial_cost);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the genetic search to completion.
    pub fn run(matrix: &CostMatrix, config: &GeneticConfig) -> Result<GeneticResult> {
        Self::run_with_cancel(matrix, config, None, |_| {})
    }

    /// Runs the genetic search, calling `on_progress` at every reporting
    /// generation.
    pub fn run_with_progress<F>(
        matrix: &CostMatrix,
        config: &GeneticConfig,
        on_progress: F,
    ) -> Result<GeneticResult>
    where
        F: FnMut(GenerationProgress),
    {
        Self::run_with_cancel(matrix, config, None, on_progress)
    }

    /// Runs the genetic search with an optional cancellation token.
    ///
    /// If `cancel` is set, the search stops before the next generation and
    /// returns the best tour of the current population. `on_progress` is a
    /// notification; setting `cancel` from inside it stops the run at the
    /// next generation boundary.
    pub fn run_with_cancel<F>(
        matrix: &CostMatrix,
        config: &GeneticConfig,
        cancel: Option<CancelFlag>,
        mut on_progress: F,
    ) -> Result<GeneticResult>
    where
        F: FnMut(GenerationProgress),
    {
        config.validate()?;
        let n = matrix.size();
        if n < 2 {
            return Err(SearchError::TooFewNodes { nodes: n });
        }

        let start = Instant::now();
        let model = CostModel::new(matrix, CostPolicy::Strict);
        let mut rng = rng_from(config.seed);
        debug!(
            "genetic search: {n} nodes, population {}, {} generations",
            config.population_size, config.generations
        );

        let mut population = Population::score(
            random_population(n, config.population_size, &mut rng),
            &model,
        )?;
        let (initial_solution, initial_cost) = best_of(&population)?;

        let mut cost_history = Vec::with_capacity(config.generations + 1);
        cost_history.push(initial_cost);
        let mut progress = Vec::new();
        let mut cancelled = false;
        let mut generations = 0;

        for generation in 0..config.generations {
            if is_cancelled(cancel.as_ref()) {
                cancelled = true;
                break;
            }

            let offspring = breed(&population, config, n, &mut rng);
            population = next_generation(&population, offspring, config, &model)?;
            generations += 1;

            let best_cost = population.best().map_or(f64::INFINITY, |ind| ind.cost);
            cost_history.push(best_cost);

            if generation % config.report_interval == 0 || generation + 1 == config.generations {
                trace!("generation {generation}: best cost {best_cost}");
                let entry = GenerationProgress {
                    generation,
                    best_cost,
                };
                progress.push(entry);
                on_progress(entry);
            }
        }

        let (final_solution, final_cost) = best_of(&population)?;
        let elapsed = start.elapsed();
        if cancelled {
            debug!("genetic search cancelled after {generations} generations");
        }
        debug!(
            "genetic search finished: cost {initial_cost} -> {final_cost} in {generations} generations ({elapsed:?})"
        );

        Ok(GeneticResult {
            initial_solution,
            initial_cost,
            final_solution,
            final_cost,
            progress,
            generations,
            cost_history,
            elapsed,
            cancelled,
        })
    }
}

/// Produces two children per population slot from roulette/tournament
/// parents. All pairs in one generation share the same crossover cut.
fn breed<R: Rng>(
    population: &Population,
    config: &GeneticConfig,
    n: usize,
    rng: &mut R,
) -> Vec<Tour> {
    let cut = rng.random_range(1..n);
    let fitness = population.fitness();
    let individuals = population.individuals();
    let mut offspring = Vec::with_capacity(2 * population.len());

    for _ in 0..population.len() {
        let p1 = &individuals[config.selection.select(&fitness, rng)].tour;
        let p2 = &individuals[config.selection.select(&fitness, rng)].tour;

        let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            config.crossover.apply(p1, p2, cut, rng)
        } else {
            (p1.clone(), p2.clone())
        };

        for child in [&mut c1, &mut c2] {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(child, rng);
            }
            repair(child, n, rng);
        }

        offspring.push(c1);
        offspring.push(c2);
    }

    offspring
}

/// Elitist replacement: the current best `elite_count` tours followed by
/// the cheapest offspring, `population_size` tours in total.
fn next_generation(
    population: &Population,
    offspring: Vec<Tour>,
    config: &GeneticConfig,
    model: &CostModel<'_>,
) -> Result<Population> {
    let elite_count = config.elite_count();

    // Ranking by strict cost equals ranking by fitness, and stays defined
    // when every child is unusable.
    let mut ranked: Vec<(f64, Tour)> = offspring
        .into_iter()
        .map(|tour| (model.cost(&tour), tour))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut next = population.top_tours(elite_count);
    next.extend(
        ranked
            .into_iter()
            .take(config.population_size - elite_count)
            .map(|(_, tour)| tour),
    );
    Population::score(next, model)
}

fn best_of(population: &Population) -> Result<(Tour, f64)> {
    population
        .best()
        .map(|ind| (ind.tour.clone(), ind.cost))
        .ok_or(SearchError::DegeneratePopulation)
}

// ============================================================================
// Tests
// ============================================================================
