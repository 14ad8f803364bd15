use crate::error::{GeneticError, Result};
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::rng::RandomNumberGenerator;

/// Flips boolean genes with an independent per-gene probability.
///
/// The workhorse for binary encodings: every locus is visited and
/// flipped with probability `chance`, so the expected number of flips
/// per genotype is `chance * length`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct FlipBitMutation {
    chance: f64,
}

impl FlipBitMutation {
    /// Creates a flip-bit mutation with the given per-gene probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `chance` is outside
    /// `[0.0, 1.0]` or not finite.
    pub fn new(chance: f64) -> Result<Self> {
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(GeneticError::Configuration(format!(
                "Flip chance must be within [0.0, 1.0], got {chance}"
            )));
        }
        Ok(Self { chance })
    }
}

impl Default for FlipBitMutation {
    /// Flips each gene with probability 0.01.
    fn default() -> Self {
        Self { chance: 0.01 }
    }
}

impl MutationStrategy<bool> for FlipBitMutation {
    fn mutate(&self, genotype: &mut [bool], rng: &mut RandomNumberGenerator) -> Result<()> {
        for gene in genotype.iter_mut() {
            if rng.gen_bool(self.chance) {
                *gene = !*gene;
            }
        }
        Ok(())
    }
}
