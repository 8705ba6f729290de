//! Closed-tour cost evaluation.

use super::matrix::CostMatrix;

/// How a missing matrix entry is treated when costing a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostPolicy {
    /// A missing edge, or an empty tour, makes the whole tour cost `+∞`.
    ///
    /// Used by the genetic search, where infinite cost means zero fitness.
    Strict,

    /// A missing edge contributes zero and is skipped.
    ///
    /// Used by the local-search variants. An empty tour costs zero.
    Lenient,
}

/// Sums edge costs around a closed tour under a [`CostPolicy`].
///
/// # Examples
///
/// ```
/// use tour_metaheur::tour::{CostMatrix, CostModel, CostPolicy};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let model = CostModel::new(&m, CostPolicy::Strict);
/// assert_eq!(model.cost(&[0, 1, 2, 3]), 95.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    matrix: &'a CostMatrix,
    policy: CostPolicy,
}

impl<'a> CostModel<'a> {
    pub fn new(matrix: &'a CostMatrix, policy: CostPolicy) -> Self {
        Self { matrix, policy }
    }

    /// Cost of `tour`, including the closing edge back to the first node.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return match self.policy {
                CostPolicy::Strict => f64::INFINITY,
                CostPolicy::Lenient => 0.0,
            };
        };

        let edges = tour
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(std::iter::once((last, first)));

        let mut total = 0.0;
        for (from, to) in edges {
            match (self.matrix.get(from, to), self.policy) {
                (Some(c), _) => total += c,
                (None, CostPolicy::Strict) => return f64::INFINITY,
                (None, CostPolicy::Lenient) => {}
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse() -> CostMatrix {
        CostMatrix::from_partial_rows(vec![
            vec![None, Some(1.0), None],
            vec![None, None, Some(2.0)],
            vec![Some(4.0), None, None],
        ])
        .unwrap()
    }

    #[test]
    fn test_strict_empty_tour_is_infinite() {
        let m = sparse();
        assert_eq!(CostModel::new(&m, CostPolicy::Strict).cost(&[]), f64::INFINITY);
        assert_eq!(CostModel::new(&m, CostPolicy::Lenient).cost(&[]), 0.0);
    }

    #[test]
    fn test_complete_cycle_same_under_both_policies() {
        let m = sparse();
        let tour = [0, 1, 2];
        assert_eq!(CostModel::new(&m, CostPolicy::Strict).cost(&tour), 7.0);
        assert_eq!(CostModel::new(&m, CostPolicy::Lenient).cost(&tour), 7.0);
    }

    #[test]
    fn test_missing_edge() {
        let m = sparse();
        // 0 -> 2 is missing, 2 -> 1 is missing, 1 -> 0 is missing.
        let tour = [0, 2, 1];
        assert_eq!(CostModel::new(&m, CostPolicy::Strict).cost(&tour), f64::INFINITY);
        assert_eq!(CostModel::new(&m, CostPolicy::Lenient).cost(&tour), 0.0);
    }

    #[test]
    fn test_missing_closing_edge_is_strict_infinite() {
        let mut m = sparse();
        m.remove(2, 0);
        assert_eq!(
            CostModel::new(&m, CostPolicy::Strict).cost(&[0, 1, 2]),
            f64::INFINITY
        );
        assert_eq!(CostModel::new(&m, CostPolicy::Lenient).cost(&[0, 1, 2]), 3.0);
    }

    #[test]
    fn test_out_of_range_node_is_missing() {
        let m = sparse();
        assert_eq!(
            CostModel::new(&m, CostPolicy::Strict).cost(&[0, 1, 9]),
            f64::INFINITY
        );
        assert_eq!(CostModel::new(&m, CostPolicy::Lenient).cost(&[0, 1, 9]), 1.0);
    }
}
