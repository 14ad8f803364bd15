use crate::error::Result;
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::mutation::MutationSchedule;
use crate::rng::RandomNumberGenerator;

/// Shuffles a contiguous run of genes.
///
/// Each fired event picks a start locus and a span, then shuffles the
/// genes inside that window. Without a `scramble_range` the span is
/// drawn up to the genotype length; with `scramble_range: Some(r)` it is
/// drawn from `1..=r`. Windows are clamped at the genotype end rather
/// than wrapping.
///
/// Scrambling preserves the multiset of gene values, so this strategy is
/// safe for permutation encodings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ScrambleGenesMutation {
    schedule: MutationSchedule,
    scramble_range: Option<usize>,
}

impl ScrambleGenesMutation {
    /// Creates a scramble mutation with the given schedule and spans up
    /// to the whole genotype.
    pub fn new(schedule: MutationSchedule) -> Self {
        Self {
            schedule,
            scramble_range: None,
        }
    }

    /// Caps the scrambled window at `range` genes.
    pub fn with_scramble_range(mut self, range: usize) -> Self {
        self.scramble_range = Some(range);
        self
    }
}

impl<G> MutationStrategy<G> for ScrambleGenesMutation {
    fn mutate(&self, genotype: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        let scramble_range = self.scramble_range;
        self.schedule.run(genotype, rng, |genes, rng| {
            let len = genes.len();
            let span = match scramble_range {
                Some(range) => rng.gen_index(range.max(1)) + 1,
                None => rng.gen_index(len) + 1,
            };
            let start = rng.gen_index(len);
            let end = (start + span).min(len);
            rng.shuffle(&mut genes[start..end]);
        });
        Ok(())
    }
}
