use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for crossover strategies.
///
/// A crossover strategy recombines two equal-length genotypes in place,
/// leaving two valid genotypes of the same length behind. Implementations
/// only rearrange genes between the parents -- length never changes, and
/// permutation-preserving variants additionally keep the multiset of gene
/// values intact.
///
/// # Examples
///
/// ```
/// use evoframe::crossover::{CrossoverStrategy, UniformCrossover};
/// use evoframe::rng::RandomNumberGenerator;
///
/// let mut a = vec![1, 2, 3, 4];
/// let mut b = vec![5, 6, 7, 8];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// UniformCrossover::new().cross(&mut a, &mut b, &mut rng).unwrap();
///
/// assert_eq!(a.len(), 4);
/// assert_eq!(b.len(), 4);
/// ```
pub trait CrossoverStrategy<G>: Debug + Send + Sync {
    /// Recombines `a` and `b` in place.
    ///
    /// Genotypes of length zero or one are left untouched: there is no
    /// crossover point to pick, and a no-op is the required behavior.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::GenotypeMismatch`](crate::error::GeneticError::GenotypeMismatch)
    /// if the parents differ in length.
    fn cross(
        &self,
        a: &mut [G],
        b: &mut [G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}
