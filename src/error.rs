//! # Error Types
//!
//! This module defines the error types shared by every part of the engine.
//! The taxonomy follows the failure categories of a generational run:
//! caller contract violations (empty populations, mismatched genotypes),
//! strategy preconditions (e.g. a roulette wheel over non-positive fitness)
//! and invalid fitness values produced by the user-supplied fitness
//! function.
//!
//! Errors detected inside a strategy propagate up through the
//! [`Environment`](crate::environment::Environment) unmodified; the engine
//! performs no error translation.
//!
//! ## Examples
//!
//! ```rust
//! use evoframe::error::{GeneticError, Result};
//!
//! fn pick_first(values: &[f64]) -> Result<f64> {
//!     values.first().copied().ok_or(GeneticError::EmptyPopulation)
//! }
//!
//! assert!(pick_first(&[]).is_err());
//! assert_eq!(pick_first(&[1.0]).unwrap(), 1.0);
//! ```

use thiserror::Error;

/// Represents errors that can occur while driving a generational run.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided,
    /// e.g. a zero population size or an out-of-range mutation chance.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when two genotypes of different lengths are
    /// handed to a crossover operator.
    #[error("Genotype length mismatch: {left} vs {right}")]
    GenotypeMismatch {
        /// Length of the first parent genotype.
        left: usize,
        /// Length of the second parent genotype.
        right: usize,
    },

    /// Error that occurs when a selection strategy's precondition is
    /// violated, e.g. roulette-wheel selection over a population whose
    /// total fitness is not positive.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a fitness function produces a non-finite
    /// value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for evolution-engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;
