use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for mutation strategies.
///
/// A mutation strategy perturbs a single genotype in place. It never
/// changes the genotype's length and never touches the specimen's cached
/// fitness -- the environment re-evaluates after reproduction.
///
/// # Examples
///
/// ```
/// use evoframe::mutation::{MutationStrategy, SwapGeneMutation};
/// use evoframe::rng::RandomNumberGenerator;
///
/// let mut genotype = vec![1, 2, 3, 4, 5];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// SwapGeneMutation::default()
///     .mutate(&mut genotype, &mut rng)
///     .unwrap();
///
/// let mut sorted = genotype.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
pub trait MutationStrategy<G>: Debug + Send + Sync {
    /// Mutates `genotype` in place.
    ///
    /// Genotypes too short to mutate meaningfully are left untouched.
    fn mutate(&self, genotype: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()>;
}
