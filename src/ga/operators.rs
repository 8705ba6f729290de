//! Permutation operators for tour chromosomes.
//!
//! # Crossover Operators
//!
//! - [`Crossover::OnePoint`]: order crossover with a single cut shared by
//!   every pair in a generation; the prefix `[0, cut)` comes from one parent
//! - [`Crossover::TwoPoint`]: classic order crossover (OX) with a random
//!   segment per pair, Davis (1985)
//!
//! # Mutation and Repair
//!
//! - [`swap_mutation`]: exchange two distinct positions
//! - [`repair`]: restore a permutation by overwriting duplicate genes with
//!   the missing nodes in shuffled order
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::tour::neighbor::distinct_pair;
use crate::tour::{is_valid_tour, Tour};
use rand::seq::SliceRandom;
use rand::Rng;

/// Order-preserving crossover variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Child keeps `parent[0..cut)` and fills `cut..n` with the other
    /// parent's genes in their cyclic order from `cut`, skipping genes
    /// already placed. `cut` is drawn once per generation in `[1, n-1]`.
    #[default]
    OnePoint,

    /// Child keeps a random segment `[start, end]` of one parent and fills
    /// the rest from the other, starting after the segment and wrapping.
    /// The segment is drawn per pair; the generation cut is ignored.
    TwoPoint,
}

impl Crossover {
    /// Recombines two parents into two children.
    ///
    /// Children are fresh tours; the parents are left untouched. Parents
    /// that are not permutations may yield children with duplicate or
    /// placeholder genes, which [`repair`] fixes.
    pub fn apply<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        cut: usize,
        rng: &mut R,
    ) -> (Tour, Tour) {
        let n = parent1.len().min(parent2.len());
        if n < 2 {
            return (parent1.to_vec(), parent2.to_vec());
        }
        let (start, end) = match self {
            Crossover::OnePoint => (0, cut.clamp(1, n - 1) - 1),
            Crossover::TwoPoint => random_segment(n, rng),
        };
        (
            ox_build_child(parent1, parent2, start, end),
            ox_build_child(parent2, parent1, start, end),
        )
    }
}

/// Build one OX child: copy `template[start..=end]`, fill from `donor`
/// beginning after the segment and wrapping around.
///
/// Positions the donor cannot fill keep `usize::MAX`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        if let Some(flag) = placed.get_mut(template[i]) {
            *flag = true;
        }
    }

    let free = (0..n).filter(|&i| i < start || i > end).count();
    let mut slots = (1..=n).map(|k| (end + k) % n).filter(|&i| i < start || i > end);
    let mut filled = 0;
    for offset in 0..donor.len() {
        if filled == free {
            break;
        }
        let gene = donor[(end + 1 + offset) % donor.len()];
        if gene < n && placed[gene] {
            continue;
        }
        if let Some(pos) = slots.next() {
            child[pos] = gene;
            filled += 1;
            if gene < n {
                placed[gene] = true;
            }
        }
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
}

/// Restores `tour` to a permutation of `0..n`.
///
/// The first occurrence of each node is kept; later duplicates and
/// out-of-range genes are overwritten, left to right, by the missing nodes
/// in shuffled order. A tour longer than `n` is truncated and a shorter one
/// is completed with the remaining missing nodes.
///
/// Returns `true` if the tour was changed.
pub fn repair<R: Rng>(tour: &mut Tour, n: usize, rng: &mut R) -> bool {
    if is_valid_tour(tour, n) {
        return false;
    }
    tour.truncate(n);

    let mut present = vec![false; n];
    for &gene in tour.iter() {
        if gene < n {
            present[gene] = true;
        }
    }
    let mut missing: Vec<usize> = (0..n).filter(|&node| !present[node]).collect();
    missing.shuffle(rng);
    let mut missing = missing.into_iter();

    let mut seen = vec![false; n];
    for gene in tour.iter_mut() {
        if *gene < n && !seen[*gene] {
            seen[*gene] = true;
            continue;
        }
        if let Some(node) = missing.next() {
            *gene = node;
            seen[node] = true;
        }
    }
    tour.extend(missing);
    true
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn is_permutation(tour: &[usize]) -> bool {
        is_valid_tour(tour, tour.len())
    }

    #[test]
    fn test_one_point_keeps_prefix_and_donor_order() {
        let mut rng = create_rng(42);
        let p1 = [0, 1, 2, 3, 4, 5];
        let p2 = [5, 4, 3, 2, 1, 0];
        let (c1, c2) = Crossover::OnePoint.apply(&p1, &p2, 2, &mut rng);

        // Prefix [0, 1] from p1; donor p2 read from index 2 wrapping:
        // 3, 2, 1, 0, 5, 4 minus {0, 1} -> 3, 2, 5, 4.
        assert_eq!(c1, vec![0, 1, 3, 2, 5, 4]);
        // Prefix [5, 4] from p2; donor p1 from index 2: 2, 3, 4, 5, 0, 1.
        assert_eq!(c2, vec![5, 4, 2, 3, 0, 1]);
    }

    #[test]
    fn test_one_point_cut_is_clamped() {
        let mut rng = create_rng(1);
        let p1 = [0, 1, 2, 3];
        let p2 = [3, 2, 1, 0];
        let (c1, _) = Crossover::OnePoint.apply(&p1, &p2, 0, &mut rng);
        assert_eq!(c1[0], 0);
        assert!(is_permutation(&c1));
        let (c1, _) = Crossover::OnePoint.apply(&p1, &p2, 99, &mut rng);
        assert_eq!(&c1[..3], &[0, 1, 2]);
        assert!(is_permutation(&c1));
    }

    #[test]
    fn test_two_point_produces_permutations() {
        let mut rng = create_rng(42);
        let p1: Vec<usize> = (0..10).collect();
        let p2: Vec<usize> = (0..10).rev().collect();
        for _ in 0..100 {
            let (c1, c2) = Crossover::TwoPoint.apply(&p1, &p2, 1, &mut rng);
            assert!(is_permutation(&c1), "invalid child: {c1:?}");
            assert!(is_permutation(&c2), "invalid child: {c2:?}");
        }
    }

    #[test]
    fn test_crossover_two_nodes() {
        let mut rng = create_rng(42);
        let (c1, c2) = Crossover::OnePoint.apply(&[0, 1], &[1, 0], 1, &mut rng);
        assert_eq!(c1, vec![0, 1]);
        assert_eq!(c2, vec![1, 0]);
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let mut rng = create_rng(42);
        let p1 = vec![2, 0, 3, 1];
        let p2 = vec![1, 3, 0, 2];
        let _ = Crossover::TwoPoint.apply(&p1, &p2, 2, &mut rng);
        assert_eq!(p1, vec![2, 0, 3, 1]);
        assert_eq!(p2, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_swap_mutation_changes_exactly_two() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut tour: Vec<usize> = (0..7).collect();
            swap_mutation(&mut tour, &mut rng);
            assert!(is_permutation(&tour));
            let moved = tour.iter().enumerate().filter(|&(i, &v)| i != v).count();
            assert_eq!(moved, 2);
        }
    }

    #[test]
    fn test_swap_mutation_tiny() {
        let mut rng = create_rng(42);
        let mut tour = vec![0];
        swap_mutation(&mut tour, &mut rng);
        assert_eq!(tour, vec![0]);
    }

    #[test]
    fn test_repair_valid_is_noop() {
        let mut rng = create_rng(42);
        let mut tour = vec![3, 1, 0, 2];
        assert!(!repair(&mut tour, 4, &mut rng));
        assert_eq!(tour, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_repair_keeps_first_occurrences() {
        let mut rng = create_rng(42);
        let mut tour = vec![2, 2, 0, 2, 4, 0];
        assert!(repair(&mut tour, 6, &mut rng));
        assert!(is_permutation(&tour));
        // Unique first-seen genes stay where they were.
        assert_eq!(tour[0], 2);
        assert_eq!(tour[2], 0);
        assert_eq!(tour[4], 4);
        let mut replaced = vec![tour[1], tour[3], tour[5]];
        replaced.sort_unstable();
        assert_eq!(replaced, vec![1, 3, 5]);
    }

    #[test]
    fn test_repair_out_of_range_and_length() {
        let mut rng = create_rng(42);
        let mut short = vec![usize::MAX, 1];
        repair(&mut short, 4, &mut rng);
        assert!(is_valid_tour(&short, 4));
        assert_eq!(short[1], 1);

        let mut long = vec![0, 1, 2, 3, 4];
        repair(&mut long, 3, &mut rng);
        assert!(is_valid_tour(&long, 3));
    }

    proptest! {
        #[test]
        fn prop_crossover_then_repair_is_permutation(
            n in 2usize..25,
            p1 in proptest::collection::vec(0usize..30, 2..25),
            p2 in proptest::collection::vec(0usize..30, 2..25),
            cut in 0usize..30,
            two_point in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let op = if two_point { Crossover::TwoPoint } else { Crossover::OnePoint };
            let (mut c1, mut c2) = op.apply(&p1, &p2, cut, &mut rng);
            repair(&mut c1, n, &mut rng);
            repair(&mut c2, n, &mut rng);
            prop_assert!(is_valid_tour(&c1, n), "c1 = {:?}", c1);
            prop_assert!(is_valid_tour(&c2, n), "c2 = {:?}", c2);
        }

        #[test]
        fn prop_crossover_of_permutations_needs_no_repair(
            n in 2usize..40,
            cut in 1usize..40,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let p1 = crate::tour::random_tour(n, &mut rng);
            let p2 = crate::tour::random_tour(n, &mut rng);
            for op in [Crossover::OnePoint, Crossover::TwoPoint] {
                let (c1, c2) = op.apply(&p1, &p2, cut, &mut rng);
                prop_assert!(is_valid_tour(&c1, n));
                prop_assert!(is_valid_tour(&c2, n));
            }
        }
    }
}
