pub mod crossover_strategy;
pub mod multi_point;
pub mod no_crossover;
pub mod order;
pub mod single_point;
pub mod uniform;

pub use crossover_strategy::CrossoverStrategy;
pub use multi_point::MultiPointCrossover;
pub use no_crossover::NoCrossover;
pub use order::OrderCrossover;
pub use single_point::SinglePointCrossover;
pub use uniform::UniformCrossover;

use crate::error::{GeneticError, Result};

/// Both parents of a crossover must have the same genotype length; a
/// mismatch is a caller contract violation, not something to clamp.
pub(crate) fn check_equal_length<G>(a: &[G], b: &[G]) -> Result<()> {
    if a.len() != b.len() {
        return Err(GeneticError::GenotypeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
