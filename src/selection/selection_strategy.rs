use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;

/// Trait for selection strategies.
///
/// A selection strategy builds a mating pool from an evaluated population:
/// it draws `mating_pool_size` specimens, with replacement, biased by the
/// fitness values the last evaluation stored on each specimen. The input
/// population is never mutated.
///
/// # Examples
///
/// ```
/// use evoframe::selection::{SelectionStrategy, TournamentSelection};
/// use evoframe::specimen::Specimen;
/// use evoframe::rng::RandomNumberGenerator;
/// use evoframe::error::Result;
///
/// #[derive(Clone, Debug)]
/// struct Number {
///     genes: Vec<i32>,
///     fitness: f64,
/// }
///
/// impl Specimen for Number {
///     type Gene = i32;
///     type Chromosome = i32;
///
///     fn genotype(&self) -> &[i32] { &self.genes }
///     fn genotype_mut(&mut self) -> &mut [i32] { &mut self.genes }
///     fn fitness(&self) -> f64 { self.fitness }
///     fn set_fitness(&mut self, fitness: f64) { self.fitness = fitness; }
///     fn phenotype(&self) -> Vec<i32> { self.genes.clone() }
/// }
///
/// fn main() -> Result<()> {
///     let population: Vec<Number> = (0..5)
///         .map(|i| Number { genes: vec![i], fitness: f64::from(i) })
///         .collect();
///
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let selection = TournamentSelection::new(2)?;
///     let mating_pool = selection.select(&population, 3, &mut rng)?;
///
///     assert_eq!(mating_pool.len(), 3);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<S>: Debug + Send + Sync
where
    S: Specimen,
{
    /// Builds a mating pool of `mating_pool_size` specimens drawn from
    /// `population`, with replacement, using the stored fitness only.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`](crate::error::GeneticError::EmptyPopulation)
    /// if the population is empty, or a strategy-specific
    /// [`GeneticError::Selection`](crate::error::GeneticError::Selection)
    /// when a precondition on the fitness distribution is violated.
    fn select(
        &self,
        population: &[S],
        mating_pool_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<S>>;
}
