use crate::error::Result;
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::rng::RandomNumberGenerator;

/// A mutation strategy that leaves every genotype untouched.
///
/// The default for freshly built environments: mutation only happens
/// once a strategy is explicitly chosen for the problem's encoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct NoMutation;

impl NoMutation {
    /// Creates a new pass-through mutation strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<G> MutationStrategy<G> for NoMutation {
    fn mutate(&self, _genotype: &mut [G], _rng: &mut RandomNumberGenerator) -> Result<()> {
        Ok(())
    }
}
