use crate::error::Result;
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::mutation::MutationSchedule;
use crate::rng::RandomNumberGenerator;

/// Swaps two genes, optionally restricted to a nearby range.
///
/// Each fired event picks one locus uniformly and exchanges it with a
/// second one. Without a `swap_range` the partner is drawn uniformly
/// from the whole genotype. With `swap_range: Some(r)` the partner is
/// drawn from `[-r, r)` around the first locus, wrapping around the
/// genotype ends, which keeps the disruption local.
///
/// Swapping preserves the multiset of gene values, so this strategy is
/// safe for permutation encodings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SwapGeneMutation {
    schedule: MutationSchedule,
    swap_range: Option<usize>,
}

impl SwapGeneMutation {
    /// Creates a swap mutation with the given schedule and no range
    /// restriction.
    pub fn new(schedule: MutationSchedule) -> Self {
        Self {
            schedule,
            swap_range: None,
        }
    }

    /// Restricts swap partners to `[-range, range)` around the first
    /// locus, wrapping around the genotype ends.
    pub fn with_swap_range(mut self, range: usize) -> Self {
        self.swap_range = Some(range);
        self
    }
}

impl<G> MutationStrategy<G> for SwapGeneMutation {
    fn mutate(&self, genotype: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        let swap_range = self.swap_range;
        self.schedule.run(genotype, rng, |genes, rng| {
            let len = genes.len();
            let a = rng.gen_index(len);
            let b = match swap_range {
                Some(range) => {
                    let offset = rng.gen_offset(range.max(1) as isize);
                    (a as isize + offset).rem_euclid(len as isize) as usize
                }
                None => rng.gen_index(len),
            };
            genes.swap(a, b);
        });
        Ok(())
    }
}
