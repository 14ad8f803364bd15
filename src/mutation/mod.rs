//! Mutation strategies.
//!
//! Mutation introduces fresh variation into a population by perturbing
//! individual genotypes in place. Two shapes of strategy live here:
//!
//! - Per-gene strategies ([`FlipBitMutation`], [`ResampleGeneMutation`])
//!   visit every locus and rewrite it with an independent probability.
//! - Event strategies ([`SwapGeneMutation`], [`ScrambleGenesMutation`],
//!   [`InverseGenesMutation`]) fire whole mutation events driven by a
//!   shared [`MutationSchedule`], each event rearranging a region of the
//!   genotype without changing the multiset of gene values. That makes
//!   them safe for permutation encodings.
//!
//! [`NoMutation`] is the pass-through default.

pub mod flip_bit;
pub mod inverse;
pub mod mutation_strategy;
pub mod no_mutation;
pub mod resample;
pub mod scramble;
pub mod swap_gene;

pub use flip_bit::FlipBitMutation;
pub use inverse::InverseGenesMutation;
pub use mutation_strategy::MutationStrategy;
pub use no_mutation::NoMutation;
pub use resample::ResampleGeneMutation;
pub use scramble::ScrambleGenesMutation;
pub use swap_gene::SwapGeneMutation;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Controls how often an event-style mutation fires on one genotype.
///
/// Each call to `mutate` offers the strategy `iterations` chances to
/// fire. A chance fires with probability `chance`, and firing stops once
/// `max_mutations` events have been performed. With `max_mutations:
/// None` every chance fires unconditionally, which turns the schedule
/// into "exactly `iterations` events per genotype".
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MutationSchedule {
    /// Probability in `[0.0, 1.0]` that any single chance fires.
    pub chance: f64,
    /// Number of chances offered per genotype per `mutate` call.
    pub iterations: usize,
    /// Cap on fired events per call; `None` fires every chance.
    pub max_mutations: Option<usize>,
}

impl MutationSchedule {
    /// Creates a schedule, validating that `chance` is a probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `chance` is outside
    /// `[0.0, 1.0]` or not finite.
    pub fn new(chance: f64, iterations: usize, max_mutations: Option<usize>) -> Result<Self> {
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(GeneticError::Configuration(format!(
                "Mutation chance must be within [0.0, 1.0], got {chance}"
            )));
        }
        Ok(Self {
            chance,
            iterations,
            max_mutations,
        })
    }

    /// Runs `mutate_once` according to this schedule.
    pub(crate) fn run<G, F>(
        &self,
        genotype: &mut [G],
        rng: &mut RandomNumberGenerator,
        mut mutate_once: F,
    ) where
        F: FnMut(&mut [G], &mut RandomNumberGenerator),
    {
        if genotype.len() < 2 {
            return;
        }

        let mut performed = 0;
        for _ in 0..self.iterations {
            if let Some(max) = self.max_mutations {
                if performed >= max {
                    break;
                }
            }
            if self.max_mutations.is_none() || rng.gen_bool(self.chance) {
                mutate_once(genotype, rng);
                performed += 1;
            }
        }
    }
}

impl Default for MutationSchedule {
    /// One chance per genotype, firing 1% of the time.
    fn default() -> Self {
        Self {
            chance: 0.01,
            iterations: 1,
            max_mutations: Some(1),
        }
    }
}
