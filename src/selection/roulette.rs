use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::{cumulative_wheel, spin};
use crate::specimen::Specimen;

/// A selection strategy that selects individuals through roulette-wheel
/// (fitness-proportionate) selection.
///
/// A cumulative-fitness wheel is rebuilt from the population on every
/// call (fitness changes every generation, so no table is carried over).
/// Negative fitness values are floored at zero when the wheel is built.
/// Each pick samples `u * total_fitness` with `u` uniform in `[0, 1)` and
/// binary-searches the wheel for the first entry that is at least the
/// sample, so ties resolve to the earliest qualifying index.
///
/// This strategy requires a population whose total (floored) fitness is
/// positive. Populations where every member scores zero or below are
/// rejected with [`GeneticError::Selection`]; use [`RankSelection`]
/// (which works on ranks, always positive) for such fitness landscapes.
///
/// [`RankSelection`]: crate::selection::RankSelection
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new roulette-wheel selection strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<S> SelectionStrategy<S> for RouletteWheelSelection
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

        let wheel = cumulative_wheel(population.iter().map(Specimen::fitness));
        let total = wheel.last().copied().unwrap_or(0.0);

        if total <= 0.0 {
            return Err(GeneticError::Selection(
                "roulette-wheel selection requires a population with positive total fitness"
                    .to_string(),
            ));
        }

        let mut mating_pool = Vec::with_capacity(mating_pool_size);
        for _ in 0..mating_pool_size {
            let target = rng.gen_f64() * total;
            mating_pool.push(population[spin(&wheel, target)].clone());
        }

        Ok(mating_pool)
    }
}
