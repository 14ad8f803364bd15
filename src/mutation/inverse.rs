use crate::error::Result;
use crate::mutation::mutation_strategy::MutationStrategy;
use crate::mutation::MutationSchedule;
use crate::rng::RandomNumberGenerator;

/// Reverses a contiguous run of genes.
///
/// Each fired event picks a start locus and a span, then reverses the
/// genes inside that window. Without an `inverse_range` the span is
/// drawn up to the genotype length; with `inverse_range: Some(r)` it is
/// drawn from `1..=r`. Windows are clamped at the genotype end rather
/// than wrapping.
///
/// Reversal preserves the multiset of gene values and is the classic
/// operator for adjacency-sensitive encodings such as tour orderings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct InverseGenesMutation {
    schedule: MutationSchedule,
    inverse_range: Option<usize>,
}

impl InverseGenesMutation {
    /// Creates an inversion mutation with the given schedule and spans
    /// up to the whole genotype.
    pub fn new(schedule: MutationSchedule) -> Self {
        Self {
            schedule,
            inverse_range: None,
        }
    }

    /// Caps the reversed window at `range` genes.
    pub fn with_inverse_range(mut self, range: usize) -> Self {
        self.inverse_range = Some(range);
        self
    }
}

impl<G> MutationStrategy<G> for InverseGenesMutation {
    fn mutate(&self, genotype: &mut [G], rng: &mut RandomNumberGenerator) -> Result<()> {
        let inverse_range = self.inverse_range;
        self.schedule.run(genotype, rng, |genes, rng| {
            let len = genes.len();
            let span = match inverse_range {
                Some(range) => rng.gen_index(range.max(1)) + 1,
                None => rng.gen_index(len) + 1,
            };
            let start = rng.gen_index(len);
            let end = (start + span).min(len);
            genes[start..end].reverse();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_preserves_multiset() {
        let mutation = InverseGenesMutation::new(MutationSchedule::new(1.0, 20, None).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut genotype: Vec<u32> = (0..16).collect();

        mutation.mutate(&mut genotype, &mut rng).unwrap();

        let mut sorted = genotype.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn test_single_event_reverses_one_window() {
        let mutation = InverseGenesMutation::new(MutationSchedule::new(1.0, 1, None).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(17);

        for _ in 0..100 {
            let original: Vec<u32> = (0..10).collect();
            let mut genotype = original.clone();
            mutation.mutate(&mut genotype, &mut rng).unwrap();

            let moved: Vec<usize> = (0..10).filter(|&i| genotype[i] != original[i]).collect();
            if let (Some(&first), Some(&last)) = (moved.first(), moved.last()) {
                let window: Vec<u32> = genotype[first..=last].to_vec();
                let mut reversed: Vec<u32> = original[first..=last].to_vec();
                reversed.reverse();
                assert_eq!(window, reversed);
            }
        }
    }

    #[test]
    fn test_zero_chance_is_noop() {
        let mutation =
            InverseGenesMutation::new(MutationSchedule::new(0.0, 100, Some(100)).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(9);
        let original: Vec<u32> = (0..8).collect();
        let mut genotype = original.clone();

        mutation.mutate(&mut genotype, &mut rng).unwrap();
        assert_eq!(genotype, original);
    }

    #[test]
    fn test_short_genotype_is_noop() {
        let mutation = InverseGenesMutation::new(MutationSchedule::new(1.0, 10, None).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut genotype = vec![3u32];

        mutation.mutate(&mut genotype, &mut rng).unwrap();
        assert_eq!(genotype, vec![3]);
    }
}
