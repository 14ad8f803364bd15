use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::specimen::Specimen;

/// A selection strategy that draws uniformly from the fittest slice of
/// the population.
///
/// The population is ranked descending by fitness and every pick is a
/// uniform draw, with replacement, from the top `best_of_percent` percent.
/// The slice never rounds down to zero members: a very small percentage
/// degenerates to always picking the single best specimen, which makes
/// this the strongest elitist configuration available.
///
/// Selection pressure is controlled entirely by the percentage: 100 is a
/// uniform draw over the whole population, 10 (the default) keeps only
/// the top decile in play.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BestFitnessPercentageSelection {
    best_of_percent: f64,
}

impl BestFitnessPercentageSelection {
    /// Creates a new strategy drawing from the top `best_of_percent`
    /// percent of the population.
    ///
    /// # Errors
    ///
    /// Returns an error if `best_of_percent` is not in `(0.0, 100.0]`.
    pub fn new(best_of_percent: f64) -> Result<Self> {
        if !(best_of_percent > 0.0 && best_of_percent <= 100.0) {
            return Err(GeneticError::Configuration(format!(
                "best_of_percent must be in (0, 100], got {}",
                best_of_percent
            )));
        }

        Ok(Self { best_of_percent })
    }

    /// Number of specimens in the eligible slice for a population of
    /// `population_size`. At least one, at most the whole population.
    fn slice_len(&self, population_size: usize) -> usize {
        let raw = (self.best_of_percent / 100.0 * population_size as f64) as usize;
        raw.clamp(1, population_size)
    }
}

impl Default for BestFitnessPercentageSelection {
    fn default() -> Self {
        Self {
            best_of_percent: 10.0,
        }
    }
}

impl<S> SelectionStrategy<S> for BestFitnessPercentageSelection
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

        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| {
            population[b]
                .fitness()
                .total_cmp(&population[a].fitness())
        });

        let slice_len = self.slice_len(population.len());

        let mut mating_pool = Vec::with_capacity(mating_pool_size);
        for _ in 0..mating_pool_size {
            let choice = order[rng.gen_index(slice_len)];
            mating_pool.push(population[choice].clone());
        }

        Ok(mating_pool)
    }
}
