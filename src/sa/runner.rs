//! SA execution loop.

use super::config::AnnealingConfig;
use crate::cancel::{is_cancelled, CancelFlag};
use crate::error::Result;
use crate::random::rng_from;
use crate::tour::factory::validate_start;
use crate::tour::neighbor::random_swap_neighbor;
use crate::tour::{CostMatrix, CostModel, CostPolicy, Tour};
use log::{debug, trace};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a simulated annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    /// Best tour seen during the run (not necessarily the final state).
    pub solution: Tour,

    /// Cost of `solution`.
    pub cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes simulated annealing from a given tour.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs SA optimization.
    pub fn run(
        matrix: &CostMatrix,
        initial: &[usize],
        config: &AnnealingConfig,
    ) -> Result<AnnealingResult> {
        Self::run_with_cancel(matrix, initial, config, None)
    }

    /// Runs SA with an optional cancellation token.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        initial: &[usize],
        config: &AnnealingConfig,
        cancel: Option<CancelFlag>,
    ) -> Result<AnnealingResult> {
        config.validate()?;
        validate_start(matrix.size(), initial)?;

        let start = Instant::now();
        let model = CostModel::new(matrix, CostPolicy::Lenient);
        let mut rng = rng_from(config.seed);

        let mut current = initial.to_vec();
        let mut current_cost = model.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        debug!(
            "simulated annealing: {} nodes, initial cost {current_cost}, T0 {temperature}",
            matrix.size()
        );

        while temperature > config.min_temperature {
            if is_cancelled(cancel.as_ref()) {
                cancelled = true;
                break;
            }
            iterations += 1;

            let neighbor = random_swap_neighbor(&current, &mut rng);
            let neighbor_cost = model.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Boltzmann acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    trace!("iteration {iterations}: new best {current_cost} at T {temperature}");
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temperature = config.cooling.cool(temperature);
        }

        let elapsed = start.elapsed();
        debug!(
            "simulated annealing finished: best {best_cost} after {iterations} iterations, T {temperature} ({elapsed:?})"
        );

        Ok(AnnealingResult {
            solution: best,
            cost: best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            elapsed,
            cancelled,
        })
    }
}
