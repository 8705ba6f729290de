//! Pairwise-swap neighborhoods shared by the local-search variants.
//!
//! Neighbors are always fresh copies; the source tour is never mutated.

use super::Tour;
use rand::Rng;

/// Picks two distinct positions in `0..n` uniformly.
///
/// Requires `n >= 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Copy of `tour` with two distinct random positions exchanged.
pub fn random_swap_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Tour {
    let mut neighbor = tour.to_vec();
    if neighbor.len() >= 2 {
        let (i, j) = distinct_pair(neighbor.len(), rng);
        neighbor.swap(i, j);
    }
    neighbor
}

/// Every tour reachable by exchanging two positions `i < j`, in
/// lexicographic `(i, j)` order. Yields `n·(n-1)/2` tours.
pub fn swap_neighbors(tour: &[usize]) -> impl Iterator<Item = Tour> + '_ {
    let n = tour.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).map(move |j| {
            let mut neighbor = tour.to_vec();
            neighbor.swap(i, j);
            neighbor
        })
    })
}
