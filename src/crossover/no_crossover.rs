use crate::crossover::check_equal_length;
use crate::crossover::crossover_strategy::CrossoverStrategy;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// A crossover strategy that leaves both parents untouched.
///
/// Useful for mutation-only runs, or as a baseline when measuring how
/// much recombination contributes to convergence. Parents still have to
/// agree on genotype length so a misconfigured population fails loudly
/// rather than silently skipping recombination.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct NoCrossover;

impl NoCrossover {
    /// Creates a new pass-through crossover strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<G> CrossoverStrategy<G> for NoCrossover {
    fn cross(
        &self,
        a: &mut [G],
        b: &mut [G],
        _rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_equal_length(a, b)?;
        Ok(())
    }
}
