use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::rng::RandomNumberGenerator;

/// Rewrites genes with fresh draws from a fixed alphabet.
///
/// Every locus is visited and, with probability `chance`, replaced by a
/// value drawn uniformly from `alphabet`. This is the natural mutation
/// for string-like encodings where any symbol may appear at any locus.
///
/// The replacement is drawn independently of the current value, so a
/// "mutated" gene may resample to the value it already had.
#[derive(Debug, Clone)]
pub struct ResampleGeneMutation<G> {
    alphabet: Vec<G>,
    chance: f64,
}

impl<G> ResampleGeneMutation<G> {
    /// Creates a resampling mutation over `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `alphabet` is empty or
    /// `chance` is outside `[0.0, 1.0]` or not finite.
    pub fn new(alphabet: Vec<G>, chance: f64) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(GeneticError::Configuration(
                "Resample alphabet must not be empty".to_string(),
            ));
        }
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(GeneticError::Configuration(format!(
                "Resample chance must be within [0.0, 1.0], got {chance}"
            )));
        }
        Ok(Self { alphabet, chance })
    }
}

impl<G> MutationStrategy<G> for ResampleGeneMutation<G>
where
    G: Clone + Debug + Send + Sync,
{
    fn mutate(&self, genotype: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        for gene in genotype.iter_mut() {
            if rng.gen_bool(self.chance) {
                *gene = self.alphabet[rng.gen_index(self.alphabet.len())].clone();
            }
        }
        Ok(())
    }
}
