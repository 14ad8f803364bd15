//! # Specimen Trait
//!
//! The `Specimen` trait defines the interface for a single candidate
//! solution: an ordered genotype of genes, a scalar fitness assigned by
//! the last evaluation, and a derived phenotype used by fitness functions
//! and termination predicates.
//!
//! Operators mutate the genotype in place through [`Specimen::genotype_mut`],
//! which hands out a mutable *slice*: the genotype length is fixed for the
//! lifetime of a specimen, and the slice type enforces it.
//!
//! ## Example
//!
//! ```rust
//! use evoframe::specimen::Specimen;
//!
//! #[derive(Clone, Debug)]
//! struct BitString {
//!     genes: Vec<bool>,
//!     fitness: f64,
//! }
//!
//! impl Specimen for BitString {
//!     type Gene = bool;
//!     type Chromosome = bool;
//!
//!     fn genotype(&self) -> &[bool] {
//!         &self.genes
//!     }
//!
//!     fn genotype_mut(&mut self) -> &mut [bool] {
//!         &mut self.genes
//!     }
//!
//!     fn fitness(&self) -> f64 {
//!         self.fitness
//!     }
//!
//!     fn set_fitness(&mut self, fitness: f64) {
//!         self.fitness = fitness;
//!     }
//!
//!     fn phenotype(&self) -> Vec<bool> {
//!         self.genes.clone()
//!     }
//! }
//! ```

use std::fmt::Debug;

/// A single member of a population.
///
/// Implementors supply the genotype representation; the engine never
/// inspects gene values itself, it only moves them around through the
/// pluggable operators. Fitness defaults to whatever the implementor
/// stores before the first evaluation (conventionally `0.0`) and is
/// overwritten by the [`Environment`](crate::environment::Environment)
/// once per generation.
///
/// The phenotype is a pure projection of the genotype with no hidden
/// state. For most problems it is the identity mapping; encodings that
/// pack several genes into one chromosome (e.g. seven boolean genes into
/// one byte) decode here.
pub trait Specimen: Clone + Debug + Send + Sync {
    /// The gene type the genotype is built from.
    type Gene: Clone + Debug + Send + Sync;

    /// The chromosome alphabet the phenotype decodes into. Equal to
    /// `Gene` for identity encodings.
    type Chromosome;

    /// Returns the genotype as a slice of genes.
    fn genotype(&self) -> &[Self::Gene];

    /// Returns the genotype as a mutable slice. Crossover and mutation
    /// operators rewrite genes through this; the length never changes.
    fn genotype_mut(&mut self) -> &mut [Self::Gene];

    /// Returns the fitness assigned by the last evaluation.
    fn fitness(&self) -> f64;

    /// Stores the result of a fitness evaluation.
    fn set_fitness(&mut self, fitness: f64);

    /// Decodes the genotype into the phenotype. Must be side-effect free.
    fn phenotype(&self) -> Vec<Self::Chromosome>;
}
