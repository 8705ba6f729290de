//! Local-search result record.

use super::Tour;
use std::time::Duration;

/// Outcome of a hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Final tour.
    pub solution: Tour,

    /// Cost of `solution` under the lenient policy.
    pub cost: f64,

    /// Passes (steepest ascent) or neighbor draws (tolerant) executed.
    pub iterations: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// Whether the run was stopped through its cancellation flag.
    pub cancelled: bool,
}
