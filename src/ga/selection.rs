//! Parent selection over normalized fitness.
//!
//! Both strategies read the population's fitness slice, where fitness is
//! the reciprocal of tour cost normalized to sum to 1 and higher is
//! better. The population is kept in fitness-descending order, so the
//! roulette walk visits the fittest tours first.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tour_metaheur::ga::Selection;
/// use tour_metaheur::random::create_rng;
///
/// let fitness = [0.5, 0.3, 0.2];
/// let mut rng = create_rng(42);
/// let idx = Selection::Roulette.select(&fitness, &mut rng);
/// assert!(idx < 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate sampling: draw `r` in `[0, 1)` and walk the
    /// cumulative fitness until it exceeds `r`.
    #[default]
    Roulette,

    /// Pick `k` indices uniformly (with replacement) and return the fittest.
    ///
    /// `Tournament(2)` is the classic binary tournament.
    Tournament(usize),
}

impl Selection {
    /// Selects a parent index.
    ///
    /// Returns 0 for an empty slice.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        if fitness.len() <= 1 {
            return 0;
        }
        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
        }
    }
}

fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let draw: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f;
        if cumulative > draw {
            return i;
        }
    }
    fitness.len() - 1 // rounding left the sum just under the draw
}

/// Later draws win ties, so a binary tournament between equals returns the
/// second contestant.
fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitness.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if fitness[idx] >= fitness[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_roulette_proportional() {
        let fitness = [0.7, 0.2, 0.1];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        let n = 10000;
        for _ in 0..n {
            counts[Selection::Roulette.select(&fitness, &mut rng)] += 1;
        }
        assert!(counts[0] > 6500 && counts[0] < 7500, "counts: {counts:?}");
        assert!(counts[2] > 700 && counts[2] < 1300, "counts: {counts:?}");
    }

    #[test]
    fn test_roulette_skips_zero_fitness() {
        let fitness = [0.0, 1.0, 0.0];
        let mut rng = create_rng(5);
        for _ in 0..1000 {
            assert_eq!(Selection::Roulette.select(&fitness, &mut rng), 1);
        }
    }

    #[test]
    fn test_roulette_rounding_fallback() {
        // Sums to slightly less than 1; draws above the sum land on the last index.
        let fitness = [0.3, 0.3, 0.3];
        let mut rng = create_rng(9);
        let mut last = 0;
        for _ in 0..5000 {
            if Selection::Roulette.select(&fitness, &mut rng) == 2 {
                last += 1;
            }
        }
        assert!(last > 1500, "expected fallback to absorb the tail, got {last}");
    }

    #[test]
    fn test_binary_tournament_favors_fitter() {
        let fitness = [0.1, 0.6, 0.3];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        for _ in 0..10000 {
            counts[Selection::Tournament(2).select(&fitness, &mut rng)] += 1;
        }
        // P(best) = 1 - (2/3)^2 = 5/9
        assert!(counts[1] > 5000, "counts: {counts:?}");
        assert!(counts[0] < counts[2], "counts: {counts:?}");
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let fitness = [0.9, 0.05, 0.05];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        for _ in 0..9000 {
            counts[Selection::Tournament(1).select(&fitness, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2500, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_single_and_empty() {
        let mut rng = create_rng(1);
        assert_eq!(Selection::Roulette.select(&[1.0], &mut rng), 0);
        assert_eq!(Selection::Tournament(2).select(&[], &mut rng), 0);
    }
}
