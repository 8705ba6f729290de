//! Node-indexed cost matrix.

use crate::error::{Result, SearchError};
use rand::Rng;

/// Square matrix of edge costs between nodes `0..n`.
///
/// Entries may be missing (no edge). The matrix may be asymmetric; the
/// diagonal is conventionally zero but is never consulted for a valid tour.
///
/// # Examples
///
/// ```
/// use tour_metaheur::tour::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 35.0],
///     vec![15.0, 35.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(1, 2), Some(35.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    n: usize,
    entries: Vec<Option<f64>>,
}

impl CostMatrix {
    /// Creates an `n × n` matrix with every entry missing.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            entries: vec![None; n * n],
        }
    }

    /// Builds a dense matrix from rows. Every row must have `rows.len()`
    /// entries, each finite and non-negative.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut matrix = Self::new(n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SearchError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                matrix.set(i, j, value)?;
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix from rows that may be sparse or ragged.
    ///
    /// `None` entries and positions past the end of a short row are missing
    /// edges. Rows longer than the node count are rejected.
    pub fn from_partial_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let n = rows.len();
        let mut matrix = Self::new(n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() > n {
                return Err(SearchError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                if let Some(value) = value {
                    matrix.set(i, j, value)?;
                }
            }
        }
        Ok(matrix)
    }

    /// Generates a complete random problem: off-diagonal costs are integers
    /// drawn uniformly from `[min, max]`, the diagonal is zero.
    pub fn random<R: Rng>(n: usize, min: u32, max: u32, rng: &mut R) -> Result<Self> {
        if min > max {
            return Err(SearchError::InvalidConfig(format!(
                "min cost {min} exceeds max cost {max}"
            )));
        }
        let mut matrix = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                let value = if i == j {
                    0.0
                } else {
                    f64::from(rng.random_range(min..=max))
                };
                matrix.entries[i * n + j] = Some(value);
            }
        }
        Ok(matrix)
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of edge `from -> to`, or `None` if the edge is missing or
    /// either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.n || to >= self.n {
            return None;
        }
        self.entries[from * self.n + to]
    }

    /// Sets the cost of edge `from -> to`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) -> Result<()> {
        if from >= self.n || to >= self.n {
            return Err(SearchError::InvalidConfig(format!(
                "edge {from} -> {to} is outside a {n}-node matrix",
                n = self.n
            )));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(SearchError::InvalidCost { from, to, value });
        }
        self.entries[from * self.n + to] = Some(value);
        Ok(())
    }

    /// Removes edge `from -> to`. Out-of-range indices are ignored.
    pub fn remove(&mut self, from: usize, to: usize) {
        if from < self.n && to < self.n {
            self.entries[from * self.n + to] = None;
        }
    }

    /// Whether `M[i][j] == M[j][i]` for every pair, missing entries included.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
