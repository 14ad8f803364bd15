use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{cumulative_wheel, spin};
use crate::specimen::Specimen;

/// A selection strategy that runs a roulette wheel over fitness ranks
/// instead of raw fitness values.
///
/// The population is ordered ascending by fitness and each member's
/// weight is replaced by its 1-based rank, so the weakest specimen gets
/// weight 1 and the fittest gets weight `n`. Because ranks are always
/// positive this strategy accepts negative real fitness values, and it
/// dampens the dominance of outlier specimens on strongly skewed fitness
/// landscapes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RankSelection;

impl RankSelection {
    /// Creates a new rank selection strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<S> SelectionStrategy<S> for RankSelection
where
    S: Specimen,
{
    fn select(
        &self,
        population: &[S],
        mating_pool_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<S>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        // Ascending by fitness, so order[i] carries rank i + 1.
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| {
            population[a]
                .fitness()
                .total_cmp(&population[b].fitness())
        });

        let wheel = cumulative_wheel((1..=order.len()).map(|rank| rank as f64));
        let total = wheel.last().copied().unwrap_or(0.0);

        let mut mating_pool = Vec::with_capacity(mating_pool_size);
        for _ in 0..mating_pool_size {
            let target = rng.gen_f64() * total;
            let choice = order[spin(&wheel, target)];
            mating_pool.push(population[choice].clone());
        }

        Ok(mating_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestSpecimen {
        genes: Vec<i32>,
        fitness: f64,
    }

    impl TestSpecimen {
        fn with_fitness(fitness: f64) -> Self {
            Self {
                genes: vec![0],
                fitness,
            }
        }
    }

    impl Specimen for TestSpecimen {
        type Gene = i32;
        type Chromosome = i32;

        fn genotype(&self) -> &[i32] {
            &self.genes
        }

        fn genotype_mut(&mut self) -> &mut [i32] {
            &mut self.genes
        }

        fn fitness(&self) -> f64 {
            self.fitness
        }

        fn set_fitness(&mut self, fitness: f64) {
            self.fitness = fitness;
        }

        fn phenotype(&self) -> Vec<i32> {
            self.genes.clone()
        }
    }

    #[test]
    fn test_selects_requested_pool_size() {
        let population: Vec<TestSpecimen> = [0.5, 0.8, 0.3, 0.9, 0.1]
            .iter()
            .map(|&f| TestSpecimen::with_fitness(f))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = RankSelection::new();
        let pool = selection.select(&population, 3, &mut rng).unwrap();

        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_accepts_negative_fitness() {
        let population: Vec<TestSpecimen> = [-10.0, -5.0, -1.0]
            .iter()
            .map(|&f| TestSpecimen::with_fitness(f))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = RankSelection::new();
        let pool = selection.select(&population, 30, &mut rng).unwrap();

        assert_eq!(pool.len(), 30);
        assert!(pool
            .iter()
            .all(|s| population.iter().any(|p| p.fitness() == s.fitness())));
    }

    #[test]
    fn test_picks_retain_original_fitness() {
        // Ranking happens on a scratch ordering; the returned specimens
        // still carry the fitness the evaluation assigned.
        let population: Vec<TestSpecimen> = [3.0, 1.0, 2.0]
            .iter()
            .map(|&f| TestSpecimen::with_fitness(f))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(3);

        let selection = RankSelection::new();
        let pool = selection.select(&population, 10, &mut rng).unwrap();

        assert!(pool.iter().all(|s| [3.0, 1.0, 2.0].contains(&s.fitness())));
    }

    #[test]
    fn test_fittest_rank_dominates() {
        // Ranks 1..=4 give the best member weight 4/10.
        let population: Vec<TestSpecimen> = (0..4)
            .map(|i| TestSpecimen::with_fitness(f64::from(i)))
            .collect();
        let mut rng = RandomNumberGenerator::from_seed(21);

        let selection = RankSelection::new();
        let pool = selection.select(&population, 200, &mut rng).unwrap();

        let best_picks = pool.iter().filter(|s| s.fitness() == 3.0).count();
        let worst_picks = pool.iter().filter(|s| s.fitness() == 0.0).count();
        assert!(best_picks > worst_picks);
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let population: Vec<TestSpecimen> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = RankSelection::new();
        assert!(matches!(
            selection.select(&population, 3, &mut rng),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
