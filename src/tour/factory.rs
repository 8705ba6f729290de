//! Random tour generation and permutation checks.

use super::Tour;
use crate::error::{Result, SearchError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly shuffled permutation of `0..n` (Fisher–Yates).
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Returns `size` independent random tours over `n` nodes.
///
/// Each tour is checked with [`is_valid_tour`]; a tour that fails is
/// discarded and replaced by a fresh shuffle rather than repaired.
pub fn random_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Tour> {
    (0..size)
        .map(|_| {
            let mut tour = random_tour(n, rng);
            while !is_valid_tour(&tour, n) {
                tour = random_tour(n, rng);
            }
            tour
        })
        .collect()
}

/// Whether `tour` is a permutation of `0..n`.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &node in tour {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}

/// Checks that `tour` is a permutation of `0..n`, describing the first defect.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(SearchError::InvalidTour {
            reason: format!("expected {n} nodes, got {}", tour.len()),
        });
    }
    let mut seen = vec![false; n];
    for (pos, &node) in tour.iter().enumerate() {
        if node >= n {
            return Err(SearchError::InvalidTour {
                reason: format!("node {node} at position {pos} is out of range"),
            });
        }
        if seen[node] {
            return Err(SearchError::InvalidTour {
                reason: format!("node {node} appears more than once"),
            });
        }
        seen[node] = true;
    }
    Ok(())
}

/// Checks a local-search starting point: at least two nodes, and a tour
/// that is a permutation of the matrix's nodes.
pub(crate) fn validate_start(nodes: usize, tour: &[usize]) -> Result<()> {
    if nodes < 2 {
        return Err(SearchError::TooFewNodes { nodes });
    }
    validate_tour(tour, nodes)
}
