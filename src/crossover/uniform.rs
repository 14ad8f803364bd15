use crate::crossover::check_equal_length;
use crate::crossover::crossover_strategy::CrossoverStrategy;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// A crossover strategy that treats each locus independently.
///
/// For every locus the genes of the two parents are swapped with
/// probability 0.5, so each child draws roughly half of its genetic
/// material from each parent with no positional bias.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Creates a new uniform crossover strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<G> CrossoverStrategy<G> for UniformCrossover {
    fn cross(
        &self,
        a: &mut [G],
        b: &mut [G],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_equal_length(a, b)?;

        if a.len() <= 1 {
            return Ok(());
        }

        for i in 0..a.len() {
            if rng.gen_bool(0.5) {
                std::mem::swap(&mut a[i], &mut b[i]);
            }
        }

        Ok(())
    }
}
