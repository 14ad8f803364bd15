use evoframe::{
    crossover::UniformCrossover,
    environment::Environment,
    mutation::ResampleGeneMutation,
    rng::RandomNumberGenerator,
    selection::BestFitnessPercentageSelection,
    specimen::Specimen,
};

const TARGET: &str = "hello world!";

#[derive(Clone, Debug)]
struct Sentence {
    genes: Vec<char>,
    fitness: f64,
}

impl Specimen for Sentence {
    type Gene = char;
    type Chromosome = String;

    fn genotype(&self) -> &[char] {
        &self.genes
    }

    fn genotype_mut(&mut self) -> &mut [char] {
        &mut self.genes
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn phenotype(&self) -> Vec<String> {
        vec![self.genes.iter().collect()]
    }
}

fn printable_ascii() -> Vec<char> {
    (32u8..128).map(char::from).collect()
}

fn matching_chars(specimen: &Sentence) -> f64 {
    specimen
        .genotype()
        .iter()
        .zip(TARGET.chars())
        .filter(|(&gene, target)| gene == *target)
        .count() as f64
}

#[test]
fn test_string_match_improves_under_evolution() {
    let alphabet = printable_ascii();
    let factory_alphabet = alphabet.clone();
    let length = TARGET.chars().count();

    let mut environment = Environment::with_rng(
        200,
        move |rng| Sentence {
            genes: (0..length)
                .map(|_| factory_alphabet[rng.gen_index(factory_alphabet.len())])
                .collect(),
            fitness: 0.0,
        },
        RandomNumberGenerator::from_seed(42),
    )
    .unwrap();

    // A sub-percent slice resolves to the single best sentence, so the
    // whole next generation descends from it and widespread unmutated
    // copies keep the best score from regressing.
    environment.set_selection(BestFitnessPercentageSelection::new(0.5).unwrap());
    environment.set_crossover(UniformCrossover::new());
    environment.set_mutation(ResampleGeneMutation::new(alphabet.clone(), 0.02).unwrap());

    environment
        .run_simulation(&matching_chars, |_| false, Some(0))
        .unwrap();
    let initial_best = environment.best().unwrap().fitness();

    let target_fitness = length as f64;
    environment
        .run_simulation(
            &matching_chars,
            |population| population.iter().any(|s| s.fitness() >= target_fitness),
            Some(300),
        )
        .unwrap();

    let best = environment.best().unwrap();
    assert!(
        best.fitness() > initial_best,
        "no improvement: started at {initial_best}, ended at {}",
        best.fitness()
    );
    assert!(best.fitness() <= target_fitness);
    assert!(best.genotype().iter().all(|g| alphabet.contains(g)));
    assert_eq!(best.phenotype()[0].chars().count(), length);
}
