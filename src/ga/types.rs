//! Scored population for the genetic search.
//!
//! A [`Population`] pairs every tour with its strict cost and normalized
//! fitness, and is always held in fitness-descending order (best first).

use crate::error::{Result, SearchError};
use crate::tour::{CostModel, Tour};

/// A tour with its cost and normalized fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The tour.
    pub tour: Tour,

    /// Cost under the strict policy; `+∞` for an unusable tour.
    pub cost: f64,

    /// Share of the population's total inverse cost, in `[0, 1]`.
    pub fitness: f64,
}

/// Tours sorted by fitness, best first.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Costs, normalizes, and sorts `tours`.
    ///
    /// Fitness is `1 / cost` divided by the population sum. Zero-cost tours
    /// share the whole probability mass equally.
    ///
    /// # Errors
    ///
    /// [`SearchError::DegeneratePopulation`] if every tour has infinite cost
    /// (or the population is empty), since the fitness sum would be zero.
    pub fn score(tours: Vec<Tour>, model: &CostModel<'_>) -> Result<Self> {
        let costs: Vec<f64> = tours.iter().map(|t| model.cost(t)).collect();
        let fitness = normalized_fitness(&costs)?;

        let mut individuals: Vec<Individual> = tours
            .into_iter()
            .zip(costs)
            .zip(fitness)
            .map(|((tour, cost), fitness)| Individual {
                tour,
                cost,
                fitness,
            })
            .collect();
        individuals.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self { individuals })
    }

    pub(crate) fn len(&self) -> usize {
        self.individuals.len()
    }

    /// The fittest individual.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Fitness values in population order.
    pub fn fitness(&self) -> Vec<f64> {
        self.individuals.iter().map(|ind| ind.fitness).collect()
    }

    /// Clones of the first `k` tours.
    pub fn top_tours(&self, k: usize) -> Vec<Tour> {
        self.individuals
            .iter()
            .take(k)
            .map(|ind| ind.tour.clone())
            .collect()
    }
}

fn normalized_fitness(costs: &[f64]) -> Result<Vec<f64>> {
    let raw: Vec<f64> = costs.iter().map(|&c| 1.0 / c).collect();

    // Zero (or vanishing) cost gives infinite inverse; those tours split the mass.
    let free = raw.iter().filter(|f| f.is_infinite()).count();
    if free > 0 {
        let share = 1.0 / free as f64;
        return Ok(raw
            .iter()
            .map(|f| if f.is_infinite() { share } else { 0.0 })
            .collect());
    }

    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(SearchError::DegeneratePopulation);
    }
    Ok(raw.into_iter().map(|f| f / sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{CostMatrix, CostPolicy};

    fn square() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_score_sorts_best_first_and_normalizes() {
        let m = square();
        let model = CostModel::new(&m, CostPolicy::Strict);
        let pop = Population::score(vec![vec![0, 1, 2, 3], vec![0, 1, 3, 2]], &model).unwrap();

        assert_eq!(pop.len(), 2);
        assert_eq!(pop.best().unwrap().tour, vec![0, 1, 3, 2]);
        assert_eq!(pop.best().unwrap().cost, 80.0);
        let total: f64 = pop.fitness().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        // 1/80 : 1/95
        let expected = (1.0 / 80.0) / (1.0 / 80.0 + 1.0 / 95.0);
        assert!((pop.individuals()[0].fitness - expected).abs() < 1e-12);
    }

    #[test]
    fn test_infinite_cost_gets_zero_fitness() {
        let mut m = square();
        m.remove(2, 3);
        let model = CostModel::new(&m, CostPolicy::Strict);
        let pop = Population::score(vec![vec![0, 1, 2, 3], vec![0, 1, 3, 2]], &model).unwrap();
        assert_eq!(pop.individuals()[0].fitness, 1.0);
        assert_eq!(pop.individuals()[1].cost, f64::INFINITY);
        assert_eq!(pop.individuals()[1].fitness, 0.0);
    }

    #[test]
    fn test_all_infinite_is_degenerate() {
        let m = CostMatrix::new(3);
        let model = CostModel::new(&m, CostPolicy::Strict);
        let err = Population::score(vec![vec![0, 1, 2], vec![2, 1, 0]], &model).unwrap_err();
        assert_eq!(err, SearchError::DegeneratePopulation);
        assert!(Population::score(vec![], &model).is_err());
    }

    #[test]
    fn test_zero_cost_tours_share_mass() {
        let m = CostMatrix::from_rows(vec![vec![0.0; 3]; 3]).unwrap();
        let model = CostModel::new(&m, CostPolicy::Strict);
        let pop = Population::score(vec![vec![0, 1, 2], vec![2, 1, 0]], &model).unwrap();
        assert!(pop.fitness().iter().all(|&f| (f - 0.5).abs() < 1e-12));
    }

    #[test]
    fn test_top_tours() {
        let m = square();
        let model = CostModel::new(&m, CostPolicy::Strict);
        let pop = Population::score(
            vec![vec![0, 1, 2, 3], vec![0, 1, 3, 2], vec![0, 2, 1, 3]],
            &model,
        )
        .unwrap();
        assert_eq!(pop.top_tours(1), vec![vec![0, 1, 3, 2]]);
        assert_eq!(pop.top_tours(10).len(), 3);
    }
}
