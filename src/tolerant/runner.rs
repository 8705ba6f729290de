//! Tolerant hill climbing execution loop.

use super::config::TolerantConfig;
use crate::cancel::{is_cancelled, CancelFlag};
use crate::error::Result;
use crate::random::rng_from;
use crate::tour::factory::validate_start;
use crate::tour::neighbor::random_swap_neighbor;
use crate::tour::{CostMatrix, CostModel, CostPolicy, SearchResult};
use log::{debug, trace};
use std::time::Instant;

/// Executes tolerant hill climbing.
pub struct TolerantRunner;

impl TolerantRunner {
    /// Climbs from `initial` until `max_no_improvement_streak` consecutive
    /// random neighbors fail to improve.
    pub fn run(
        matrix: &CostMatrix,
        initial: &[usize],
        config: &TolerantConfig,
    ) -> Result<SearchResult> {
        Self::run_with_cancel(matrix, initial, config, None)
    }

    /// Runs tolerant hill climbing with an optional cancellation token,
    /// polled before each draw.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        initial: &[usize],
        config: &TolerantConfig,
        cancel: Option<CancelFlag>,
    ) -> Result<SearchResult> {
        config.validate()?;
        validate_start(matrix.size(), initial)?;

        let start = Instant::now();
        let model = CostModel::new(matrix, CostPolicy::Lenient);
        let mut rng = rng_from(config.seed);
        let mut current = initial.to_vec();
        let mut current_cost = model.cost(&current);
        let mut iterations = 0;
        let mut streak = 0;
        let mut cancelled = false;
        debug!(
            "tolerant hill climbing: {} nodes, initial cost {current_cost}, patience {}",
            matrix.size(),
            config.max_no_improvement_streak
        );

        while streak < config.max_no_improvement_streak {
            if is_cancelled(cancel.as_ref()) {
                cancelled = true;
                break;
            }
            iterations += 1;

            let neighbor = random_swap_neighbor(&current, &mut rng);
            let cost = model.cost(&neighbor);
            if cost < current_cost {
                trace!("iteration {iterations}: cost {current_cost} -> {cost}");
                current = neighbor;
                current_cost = cost;
                streak = 0;
            } else {
                streak += 1;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            "tolerant hill climbing finished: cost {current_cost} after {iterations} draws ({elapsed:?})"
        );

        Ok(SearchResult {
            solution: current,
            cost: current_cost,
            iterations,
            elapsed,
            cancelled,
        })
    }
}
