use crate::crossover::check_equal_length;
use crate::crossover::crossover_strategy::CrossoverStrategy;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// A crossover strategy with a single crossover point.
///
/// One index `k` is picked uniformly in `[0, length)` and the suffixes
/// `[k, length)` are swapped between the parents.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Creates a new single-point crossover strategy.
    pub fn new() -> Self {
        Self
    }

    /// Swaps the suffixes `[point, len)` between `a` and `b`.
    fn cross_at<G>(a: &mut [G], b: &mut [G], point: usize) {
        for i in point..a.len() {
            std::mem::swap(&mut a[i], &mut b[i]);
        }
    }
}

impl<G> CrossoverStrategy<G> for SinglePointCrossover {
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
        Self::cross_at(a, b, point);

        Ok(())
    }
}
