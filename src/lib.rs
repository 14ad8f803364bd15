pub mod crossover;
pub mod environment;
pub mod error;
pub mod mutation;
pub mod rng;
pub mod selection;
pub mod specimen;

// Re-export commonly used types for convenience
pub use environment::Environment;
pub use error::{GeneticError, Result};
pub use specimen::Specimen;
