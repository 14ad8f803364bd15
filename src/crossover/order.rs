use crate::crossover::check_equal_length;
use crate::crossover::crossover_strategy::CrossoverStrategy;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// An order-preserving crossover for permutation genotypes.
///
/// Positional swaps would corrupt a permutation encoding (e.g. a route
/// ordering) by duplicating and dropping elements. This operator instead
/// picks one crossover point `k` and rebuilds each child as:
///
/// 1. keep the parent's own suffix `[k, length)` unchanged,
/// 2. fill the prefix with the genes of the *other* parent that do not
///    appear in that suffix, preserving their relative order.
///
/// Since both parents are permutations of the same gene set, the donor
/// contributes exactly `k` missing genes and the result is again a valid
/// permutation: no duplicates introduced, none dropped.
///
/// Genes must be duplicate-free within each parent; parents over
/// different gene sets are rejected.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OrderCrossover;

impl OrderCrossover {
    /// Creates a new order-preserving crossover strategy.
    pub fn new() -> Self {
        Self
    }

    /// Builds one child: `keep`'s suffix from `point`, prefixed by the
    /// donor genes missing from that suffix in donor order.
    fn rebuild<G: Clone + PartialEq>(keep: &[G], donor: &[G], point: usize) -> Vec<G> {
        let suffix = &keep[point..];
        let mut child: Vec<G> = donor
            .iter()
            .filter(|gene| !suffix.contains(gene))
            .cloned()
            .collect();
        child.extend(suffix.iter().cloned());
        child
    }
}

impl<G> CrossoverStrategy<G> for OrderCrossover
where
    G: Clone + PartialEq,
{
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

        let point = rng.gen_index(a.len());
        let new_a = Self::rebuild(a, b, point);
        let new_b = Self::rebuild(b, a, point);

        if new_a.len() != a.len() || new_b.len() != b.len() {
            return Err(GeneticError::Configuration(
                "order crossover requires duplicate-free permutations over the same gene set"
                    .to_string(),
            ));
        }

        a.clone_from_slice(&new_a);
        b.clone_from_slice(&new_b);

        Ok(())
    }
}
