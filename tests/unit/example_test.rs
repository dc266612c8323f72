use super::*;
use crate::helpers::utils::create_test_environment;
use crate::helpers::utils::random::{EchoRandom, FakeRandom};

#[test]
fn can_generate_random_population() {
    let initializer = RandomBitStringInitializer::new(16);

    let population = initializer.generate(10, &EchoRandom::new(true));

    assert_eq!(population.len(), 10);
    assert!(population.iter().all(|individual| individual.genes.len() == 16));
    assert!(population.iter().all(|individual| individual.genes.iter().all(|&gene| gene)));
}

#[test]
fn can_flip_genes_with_probability() {
    let mutation = FlipBitMutation::new(0.5);
    let individual = BitVectorIndividual::new(vec![true, true, true]);

    let mutated = mutation.mutate(individual, &FakeRandom::new(vec![], vec![0.4, 0.6, 0.3]));

    assert_eq!(mutated.genes, vec![false, true, false]);
}

#[test]
fn can_recombine_genes_from_both_parents() {
    let crossover = UniformCrossover::default();
    let first = BitVectorIndividual::new(vec![true, true, true]);
    let second = BitVectorIndividual::new(vec![false, false, false]);

    let child = crossover.recombine((&first, &second), &FakeRandom::new(vec![], vec![0.4, 0.6, 0.4]));

    assert_eq!(child.genes, vec![true, false, true]);
}

#[test]
fn can_count_one_max_fitness() {
    let fitness_fn = create_one_max_function();

    assert_eq!((fitness_fn)(&BitVectorIndividual::new(vec![true, false, true, true])), 3.);
    assert_eq!((fitness_fn)(&BitVectorIndividual::new(vec![])), 0.);
}

#[test]
fn can_solve_one_max_problem() {
    let (best, fitness) = Solver::default()
        .with_genes(16)
        .with_population_size(20)
        .with_generations(50)
        .with_elitism(true)
        .with_environment(create_test_environment())
        .solve()
        .expect("cannot solve the problem");

    assert_eq!(best.genes.len(), 16);
    assert_eq!(fitness, best.genes.iter().filter(|&&gene| gene).count() as Float);
    assert!(fitness >= 10.);
}

#[test]
fn can_solve_minimization_problem() {
    let fitness_fn: FitnessFn =
        Arc::new(|individual| individual.genes.iter().filter(|&&gene| gene).count() as Float + 1.);

    let (_, fitness) = Solver::default()
        .with_genes(16)
        .with_population_size(20)
        .with_generations(20)
        .with_objective(Objective::Minimize)
        .with_fitness_fn(fitness_fn)
        .with_environment(create_test_environment())
        .solve()
        .expect("cannot solve the problem");

    assert!(fitness <= 9.);
}
