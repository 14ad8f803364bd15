use evoframe::{
    crossover::{NoCrossover, UniformCrossover},
    environment::Environment,
    error::GeneticError,
    mutation::{MutationSchedule, SwapGeneMutation},
    rng::RandomNumberGenerator,
    selection::{RankSelection, TournamentSelection},
    specimen::Specimen,
};

#[derive(Clone, Debug, PartialEq)]
struct BitString {
    genes: Vec<bool>,
    fitness: f64,
}

impl Specimen for BitString {
    type Gene = bool;
    type Chromosome = bool;

    fn genotype(&self) -> &[bool] {
        &self.genes
    }

    fn genotype_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn phenotype(&self) -> Vec<bool> {
        self.genes.clone()
    }
}

fn count_ones(specimen: &BitString) -> f64 {
    specimen.genotype().iter().filter(|&&g| g).count() as f64
}

fn bit_environment(population_size: usize, seed: u64) -> Environment<BitString> {
    Environment::with_rng(
        population_size,
        |rng| BitString {
            genes: (0..8).map(|_| rng.gen_bool(0.5)).collect(),
            fitness: 0.0,
        },
        RandomNumberGenerator::from_seed(seed),
    )
    .unwrap()
}

#[test]
fn test_zero_chance_mutation_introduces_no_new_genotypes() {
    // With pass-through crossover and a mutation that never fires, every
    // genotype in any later generation must already exist in the initial
    // population.
    let mut environment = bit_environment(4, 42);
    environment.set_crossover(NoCrossover::new());
    environment.set_mutation(SwapGeneMutation::new(
        MutationSchedule::new(0.0, 1000, Some(1000)).unwrap(),
    ));
    environment.set_selection(TournamentSelection::new(2).unwrap());

    environment
        .run_simulation(&count_ones, |_| false, Some(0))
        .unwrap();
    let initial: Vec<Vec<bool>> = environment
        .population()
        .iter()
        .map(|s| s.genotype().to_vec())
        .collect();

    environment
        .run_simulation(&count_ones, |_| false, Some(50))
        .unwrap();

    assert_eq!(environment.generation(), 50);
    for specimen in environment.population() {
        assert!(initial.iter().any(|g| g == specimen.genotype()));
    }
}

#[test]
fn test_strategies_swap_between_runs_without_rebuilding_population() {
    let mut environment = bit_environment(12, 7);
    environment.set_selection(TournamentSelection::new(3).unwrap());
    environment
        .run_simulation(&count_ones, |_| false, Some(10))
        .unwrap();
    assert_eq!(environment.generation(), 10);

    // Swap every strategy and keep evolving the same population.
    environment.set_selection(RankSelection::new());
    environment.set_crossover(UniformCrossover::new());
    environment.set_mutation(SwapGeneMutation::new(
        MutationSchedule::new(0.5, 2, Some(2)).unwrap(),
    ));
    environment
        .run_simulation(&count_ones, |_| false, Some(10))
        .unwrap();

    assert_eq!(environment.generation(), 20);
    assert_eq!(environment.population().len(), 12);
    assert!(environment
        .population()
        .iter()
        .all(|s| s.genotype().len() == 8));
}

#[test]
fn test_finish_condition_sees_evaluated_population() {
    let mut environment = bit_environment(8, 11);
    let mut seen_unassigned = false;
    environment
        .run_simulation(
            &|s: &BitString| count_ones(s) + 1.0,
            |population| {
                seen_unassigned |= population.iter().any(|s| s.fitness() < 1.0);
                true
            },
            None,
        )
        .unwrap();

    assert!(!seen_unassigned);
    assert_eq!(environment.generation(), 0);
}

#[test]
fn test_best_before_any_run_is_an_error() {
    let environment = bit_environment(8, 1);
    assert!(matches!(
        environment.best(),
        Err(GeneticError::EmptyPopulation)
    ));
}
