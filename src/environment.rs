//! The generational evolution loop.
//!
//! [`Environment`] owns a population of specimens together with the
//! three strategy objects that drive reproduction. Each generation it
//! selects a mating pool, recombines it pairwise, mutates every
//! offspring, and re-evaluates fitness. Strategies are trait objects so
//! they can be swapped between runs without rebuilding the population.
//!
//! ## Examples
//!
//! ```
//! use evoframe::environment::Environment;
//! use evoframe::mutation::FlipBitMutation;
//! use evoframe::rng::RandomNumberGenerator;
//! use evoframe::selection::TournamentSelection;
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
//!     fn genotype_mut(&mut self) -> &mut [bool] {
//!         &mut self.genes
//!     }
//!     fn fitness(&self) -> f64 {
//!         self.fitness
//!     }
//!     fn set_fitness(&mut self, fitness: f64) {
//!         self.fitness = fitness;
//!     }
//!     fn phenotype(&self) -> Vec<bool> {
//!         self.genes.clone()
//!     }
//! }
//!
//! let mut environment = Environment::with_rng(
//!     20,
//!     |rng| BitString {
//!         genes: (0..16).map(|_| rng.gen_bool(0.5)).collect(),
//!         fitness: 0.0,
//!     },
//!     RandomNumberGenerator::from_seed(42),
//! )
//! .unwrap();
//!
//! environment.set_selection(TournamentSelection::new(3).unwrap());
//! environment.set_mutation(FlipBitMutation::new(0.02).unwrap());
//!
//! let ones = |s: &BitString| s.genotype().iter().filter(|&&g| g).count() as f64;
//! environment
//!     .run_simulation(&ones, |population| {
//!         population.iter().any(|s| s.fitness() >= 16.0)
//!     }, Some(50))
//!     .unwrap();
//!
//! assert!(environment.best().unwrap().fitness() > 0.0);
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::crossover::{CrossoverStrategy, SinglePointCrossover};
use crate::error::{GeneticError, Result};
use crate::mutation::{MutationStrategy, NoMutation};
use crate::rng::RandomNumberGenerator;
use crate::selection::{BestFitnessPercentageSelection, SelectionStrategy};
use crate::specimen::Specimen;

/// Population size at which fitness evaluation switches to rayon.
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

type SpecimenFactory<S> = Box<dyn Fn(&mut RandomNumberGenerator) -> S + Send + Sync>;

/// Orchestrates the generational loop over one population.
pub struct Environment<S: Specimen> {
    population: Vec<S>,
    population_size: usize,
    generation: u64,
    parallel_threshold: usize,
    factory: SpecimenFactory<S>,
    selection: Box<dyn SelectionStrategy<S>>,
    crossover: Box<dyn CrossoverStrategy<S::Gene>>,
    mutation: Box<dyn MutationStrategy<S::Gene>>,
    rng: RandomNumberGenerator,
}

impl<S: Specimen> std::fmt::Debug for Environment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("population_size", &self.population_size)
            .field("generation", &self.generation)
            .field("parallel_threshold", &self.parallel_threshold)
            .field("selection", &self.selection)
            .field("crossover", &self.crossover)
            .field("mutation", &self.mutation)
            .finish_non_exhaustive()
    }
}

impl<S: Specimen> Environment<S> {
    /// Creates an environment with an entropy-seeded generator.
    ///
    /// `factory` builds one random specimen; it is called
    /// `population_size` times when the population is first generated.
    /// The environment starts with
    /// [`BestFitnessPercentageSelection`], [`SinglePointCrossover`] and
    /// [`NoMutation`] until strategies are set explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `population_size` is
    /// zero.
    pub fn new<F>(population_size: usize, factory: F) -> Result<Self>
    where
        F: Fn(&mut RandomNumberGenerator) -> S + Send + Sync + 'static,
    {
        Self::with_rng(population_size, factory, RandomNumberGenerator::new())
    }

    /// Creates an environment driven by the given generator, which makes
    /// whole runs reproducible from a seed.
    pub fn with_rng<F>(
        population_size: usize,
        factory: F,
        rng: RandomNumberGenerator,
    ) -> Result<Self>
    where
        F: Fn(&mut RandomNumberGenerator) -> S + Send + Sync + 'static,
    {
        if population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            population: Vec::new(),
            population_size,
            generation: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            factory: Box::new(factory),
            selection: Box::new(BestFitnessPercentageSelection::default()),
            crossover: Box::new(SinglePointCrossover::new()),
            mutation: Box::new(NoMutation::new()),
            rng,
        })
    }

    /// Replaces the selection strategy.
    pub fn set_selection(&mut self, selection: impl SelectionStrategy<S> + 'static) {
        self.selection = Box::new(selection);
    }

    /// Replaces the crossover strategy.
    pub fn set_crossover(&mut self, crossover: impl CrossoverStrategy<S::Gene> + 'static) {
        self.crossover = Box::new(crossover);
    }

    /// Replaces the mutation strategy.
    pub fn set_mutation(&mut self, mutation: impl MutationStrategy<S::Gene> + 'static) {
        self.mutation = Box::new(mutation);
    }

    /// Sets the population size at which fitness evaluation goes
    /// parallel.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// The current population. Empty until the first simulation run (or
    /// an explicit [`generate_population`](Self::generate_population)).
    pub fn population(&self) -> &[S] {
        &self.population
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The specimen with the highest fitness in the current population.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if no population has
    /// been generated yet.
    pub fn best(&self) -> Result<&S> {
        self.population
            .iter()
            .max_by(|a, b| a.fitness().total_cmp(&b.fitness()))
            .ok_or(GeneticError::EmptyPopulation)
    }

    /// Builds a fresh population from the factory, replacing any
    /// previous one and resetting the generation counter.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the factory yields
    /// specimens with empty or unequal genotype lengths. Crossover
    /// operates on pairs and requires every genotype in the population
    /// to have the same length.
    pub fn generate_population(&mut self) -> Result<()> {
        let mut population = Vec::with_capacity(self.population_size);
        for _ in 0..self.population_size {
            population.push((self.factory)(&mut self.rng));
        }

        let genotype_length = population[0].genotype().len();
        if genotype_length == 0 {
            return Err(GeneticError::Configuration(
                "Specimen factory produced an empty genotype".to_string(),
            ));
        }
        if let Some(odd) = population
            .iter()
            .find(|s| s.genotype().len() != genotype_length)
        {
            return Err(GeneticError::Configuration(format!(
                "Specimen factory produced unequal genotype lengths: {} vs {}",
                genotype_length,
                odd.genotype().len()
            )));
        }

        self.population = population;
        self.generation = 0;
        debug!(
            population_size = self.population_size,
            genotype_length, "generated population"
        );
        Ok(())
    }

    /// Scores every specimen with `fitness_fn`, going parallel once the
    /// population reaches the parallel threshold.
    fn evaluate<F>(&mut self, fitness_fn: &F) -> Result<()>
    where
        F: Fn(&S) -> f64 + Sync,
    {
        let assign = |specimen: &mut S| -> Result<()> {
            let fitness = fitness_fn(specimen);
            if !fitness.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Fitness function returned a non-finite value: {fitness}"
                )));
            }
            specimen.set_fitness(fitness);
            Ok(())
        };

        if self.population.len() >= self.parallel_threshold {
            self.population.par_iter_mut().try_for_each(assign)
        } else {
            self.population.iter_mut().try_for_each(assign)
        }
    }

    /// Runs one generation: select, cross, mutate, replace, re-evaluate.
    fn iteration<F>(&mut self, fitness_fn: &F) -> Result<()>
    where
        F: Fn(&S) -> f64 + Sync,
    {
        let mut offspring =
            self.selection
                .select(&self.population, self.population.len(), &mut self.rng)?;

        // An odd trailing specimen carries over without recombination.
        for pair in offspring.chunks_mut(2) {
            if let [a, b] = pair {
                self.crossover
                    .cross(a.genotype_mut(), b.genotype_mut(), &mut self.rng)?;
            }
        }

        for specimen in offspring.iter_mut() {
            self.mutation.mutate(specimen.genotype_mut(), &mut self.rng)?;
        }

        self.population = offspring;
        self.generation += 1;
        self.evaluate(fitness_fn)
    }

    /// Runs the generational loop until `finish` approves a population
    /// or `max_iterations` generations have passed (`None` runs until
    /// `finish` fires).
    ///
    /// A population is generated from the factory if none exists yet;
    /// otherwise the run continues from the current population, so
    /// strategies can be swapped between consecutive runs. The initial
    /// population is evaluated and offered to `finish` before any
    /// generation is stepped, which means `Some(0)` still assigns
    /// fitness to every specimen.
    ///
    /// # Errors
    ///
    /// Propagates configuration, selection and fitness errors from the
    /// strategies and the fitness function.
    pub fn run_simulation<F, C>(
        &mut self,
        fitness_fn: &F,
        mut finish: C,
        max_iterations: Option<u64>,
    ) -> Result<()>
    where
        F: Fn(&S) -> f64 + Sync,
        C: FnMut(&[S]) -> bool,
    {
        if self.population.is_empty() {
            self.generate_population()?;
        }
        self.evaluate(fitness_fn)?;

        let mut remaining = max_iterations;
        while !finish(&self.population) {
            if let Some(ref mut left) = remaining {
                if *left == 0 {
                    break;
                }
                *left -= 1;
            }

            self.iteration(fitness_fn)?;

            let best = self.best()?;
            debug!(
                generation = self.generation,
                best_fitness = best.fitness(),
                "generation complete"
            );
            trace!(best = ?best, "best specimen");
        }

        Ok(())
    }
}
