use crate::crossover::check_equal_length;
use crate::crossover::crossover_strategy::CrossoverStrategy;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A crossover strategy with multiple crossover points.
///
/// `points` indices are picked uniformly in `[0, length)` and sorted
/// ascending; genes are then swapped in every other interval between
/// consecutive sorted points (the first, third, ... interval). An odd
/// trailing point is ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct MultiPointCrossover {
    points: usize,
}

impl MultiPointCrossover {
    /// Creates a new multi-point crossover strategy with `points`
    /// crossover points per call.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is zero.
    pub fn new(points: usize) -> Result<Self> {
        if points == 0 {
            return Err(GeneticError::Configuration(
                "multi-point crossover needs at least one crossover point".to_string(),
            ));
        }

        Ok(Self { points })
    }
}

impl<G> CrossoverStrategy<G> for MultiPointCrossover {
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

        let mut points: Vec<usize> = (0..self.points).map(|_| rng.gen_index(a.len())).collect();
        points.sort_unstable();

        for pair in points.chunks_exact(2) {
            for i in pair[0]..pair[1] {
                std::mem::swap(&mut a[i], &mut b[i]);
            }
        }

        Ok(())
    }
}
