//! Steepest-ascent execution loop.

use crate::cancel::{is_cancelled, CancelFlag};
use crate::error::Result;
use crate::tour::factory::validate_start;
use crate::tour::neighbor::swap_neighbors;
use crate::tour::{CostMatrix, CostModel, CostPolicy, SearchResult, Tour};
use log::{debug, trace};
use std::time::Instant;

/// Executes steepest-ascent hill climbing.
///
/// # Examples
///
/// ```
/// use tour_metaheur::hc::HillClimbingRunner;
/// use tour_metaheur::tour::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let result = HillClimbingRunner::run(&matrix, &[0, 1, 2, 3]).unwrap();
/// assert_eq!(result.cost, 80.0);
/// ```
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Climbs from `initial` until no swap neighbor is cheaper.
    pub fn run(matrix: &CostMatrix, initial: &[usize]) -> Result<SearchResult> {
        Self::run_with_cancel(matrix, initial, None)
    }

    /// Runs hill climbing with an optional cancellation token, polled
    /// before each pass.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        initial: &[usize],
        cancel: Option<CancelFlag>,
    ) -> Result<SearchResult> {
        validate_start(matrix.size(), initial)?;

        let start = Instant::now();
        let model = CostModel::new(matrix, CostPolicy::Lenient);
        let mut current = initial.to_vec();
        let mut current_cost = model.cost(&current);
        let mut iterations = 0;
        let mut cancelled = false;
        debug!(
            "hill climbing: {} nodes, initial cost {current_cost}",
            matrix.size()
        );

        loop {
            if is_cancelled(cancel.as_ref()) {
                cancelled = true;
                break;
            }
            iterations += 1;

            let mut best: Option<Tour> = None;
            let mut best_cost = current_cost;
            for neighbor in swap_neighbors(&current) {
                let cost = model.cost(&neighbor);
                if cost < best_cost {
                    best_cost = cost;
                    best = Some(neighbor);
                }
            }

            // Local optimum: no neighbor improves.
            let Some(next) = best else {
                break;
            };
            trace!("pass {iterations}: cost {current_cost} -> {best_cost}");
            current = next;
            current_cost = best_cost;
        }

        let elapsed = start.elapsed();
        debug!("hill climbing finished: cost {current_cost} after {iterations} passes ({elapsed:?})");

        Ok(SearchResult {
            solution: current,
            cost: current_cost,
            iterations,
            elapsed,
            cancelled,
        })
    }
}
