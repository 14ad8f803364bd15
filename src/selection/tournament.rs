use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::specimen::Specimen;

/// A selection strategy that selects individuals through tournament
/// selection.
///
/// For each pick, `tournament_size` candidate indices are sampled
/// uniformly with replacement and the candidate with the maximum fitness
/// wins; when two candidates tie, the one drawn first is kept. Because
/// only fitness *comparisons* matter, negative fitness values are fine,
/// and this is the one strategy whose selection pressure is tunable
/// independent of the fitness scale:
///
/// - a tournament of 1 degenerates to uniform random selection,
/// - larger tournaments focus ever harder on the fittest individuals.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new tournament selection strategy with the given
    /// tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is zero.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    /// Runs a single tournament and returns the winning population index.
    fn run_tournament<S: Specimen>(
        &self,
        population: &[S],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut winner = rng.gen_index(population.len());
        for _ in 1..self.tournament_size {
            let challenger = rng.gen_index(population.len());
            if population[challenger].fitness() > population[winner].fitness() {
                winner = challenger;
            }
        }
        winner
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl<S> SelectionStrategy<S> for TournamentSelection
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

        let mut mating_pool = Vec::with_capacity(mating_pool_size);
        for _ in 0..mating_pool_size {
            let winner = self.run_tournament(population, rng);
            mating_pool.push(population[winner].clone());
        }

        Ok(mating_pool)
    }
}
