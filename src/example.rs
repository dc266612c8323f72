//! This module contains example models and logic to demonstrate practical usage of the crate.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// An example fitness function which evaluates the given bit string individual.
pub type FitnessFn = Arc<dyn Fn(&BitVectorIndividual) -> Float + Send + Sync>;

/// An example individual modeled as a fixed length bit string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitVectorIndividual {
    /// An individual payload.
    pub genes: Vec<bool>,
}

impl BitVectorIndividual {
    /// Creates a new instance of `BitVectorIndividual` with the given genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl Individual for BitVectorIndividual {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

/// Creates a population of random bit strings of the fixed length.
pub struct RandomBitStringInitializer {
    genes: usize,
}

impl RandomBitStringInitializer {
    /// Creates a new instance of `RandomBitStringInitializer` with the given genes amount.
    pub fn new(genes: usize) -> Self {
        Self { genes }
    }
}

impl PopulationInitializer for RandomBitStringInitializer {
    type Individual = BitVectorIndividual;

    fn generate(&self, size: usize, random: &(dyn Random)) -> Vec<Self::Individual> {
        (0..size)
            .map(|_| BitVectorIndividual::new((0..self.genes).map(|_| random.is_head_not_tails()).collect()))
            .collect()
    }
}

/// A mutation which independently flips every gene with the given probability.
pub struct FlipBitMutation {
    probability: Float,
}

impl FlipBitMutation {
    /// Creates a new instance of `FlipBitMutation` with the given gene flip probability.
    pub fn new(probability: Float) -> Self {
        Self { probability }
    }
}

impl Default for FlipBitMutation {
    /// Creates a mutation with one gene flip per fifty genes on average.
    fn default() -> Self {
        Self::new(1. / 50.)
    }
}

impl Mutation for FlipBitMutation {
    type Individual = BitVectorIndividual;

    fn mutate(&self, individual: Self::Individual, random: &(dyn Random)) -> Self::Individual {
        let mut individual = individual;

        individual.genes.iter_mut().filter(|_| random.is_hit(self.probability)).for_each(|gene| *gene = !*gene);

        individual
    }
}

/// A crossover which picks every gene from one of the parents with equal probability.
#[derive(Default)]
pub struct UniformCrossover {}

impl Crossover for UniformCrossover {
    type Individual = BitVectorIndividual;

    fn recombine(&self, parents: (&Self::Individual, &Self::Individual), random: &(dyn Random)) -> Self::Individual {
        let (first, second) = parents;
        assert_eq!(first.genes.len(), second.genes.len());

        let genes = first
            .genes
            .iter()
            .zip(second.genes.iter())
            .map(|(&a, &b)| if random.is_head_not_tails() { a } else { b })
            .collect();

        BitVectorIndividual::new(genes)
    }
}

/// Creates a fitness function for the "one max" problem: an amount of genes set to true.
pub fn create_one_max_function() -> FitnessFn {
    Arc::new(|individual| individual.genes.iter().filter(|&&gene| gene).count() as Float)
}

/// An example of the optimization solver to solve trivial problems with a bit string encoding.
#[derive(Default)]
pub struct Solver {
    genes: Option<usize>,
    population_size: Option<usize>,
    generations: Option<usize>,
    objective: Option<Objective>,
    elitism: bool,
    fitness_fn: Option<FitnessFn>,
    environment: Option<Arc<Environment>>,
}

impl Solver {
    /// Sets an amount of genes in each individual. Default is 64.
    pub fn with_genes(mut self, genes: usize) -> Self {
        self.genes = Some(genes);
        self
    }

    /// Sets a population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Sets an amount of generations to run.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Sets an objective direction. Default is maximization.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Enables or disables elitism. Default is disabled.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets a fitness function. Default is the "one max" function.
    pub fn with_fitness_fn(mut self, fitness_fn: FitnessFn) -> Self {
        self.fitness_fn = Some(fitness_fn);
        self
    }

    /// Sets an environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Runs the evaluation loop and returns the best evaluated individual with its fitness.
    pub fn solve(self) -> Result<(BitVectorIndividual, Float), EvolutionError> {
        let genes = self.genes.unwrap_or(64);
        let objective = self.objective.unwrap_or_default();
        let fitness_fn = self.fitness_fn.unwrap_or_else(create_one_max_function);
        let environment = self.environment.unwrap_or_else(|| Arc::new(Environment::default()));
        let logger = environment.logger.clone();

        let mut builder = GeneticAlgorithmBuilder::default()
            .with_objective(objective)
            .with_elitism(self.elitism)
            .with_initializer(Box::new(RandomBitStringInitializer::new(genes)))
            .with_mutation(Box::new(FlipBitMutation::default()))
            .with_crossover(Box::new(UniformCrossover::default()))
            .with_environment(environment);

        if let Some(size) = self.population_size {
            builder = builder.with_population_size(size);
        }

        if let Some(generations) = self.generations {
            builder = builder.with_generations(generations);
        }

        let mut algorithm = builder.build()?;

        let is_better = |a: Float, b: Float| match objective {
            Objective::Maximize => compare_floats(a, b) == Ordering::Greater,
            Objective::Minimize => compare_floats(a, b) == Ordering::Less,
        };

        let evaluations = algorithm.generations() * algorithm.population().len();

        let best = algorithm.get_current_individual()?;
        let best_fitness = (fitness_fn)(&best);
        algorithm.update_current_individual_fitness(best_fitness);

        let (best, best_fitness) = (1..evaluations).try_fold((best, best_fitness), |(best, best_fitness), _| {
            let individual = algorithm.get_current_individual()?;
            let fitness = (fitness_fn)(&individual);

            algorithm.update_current_individual_fitness(fitness);

            if is_better(fitness, best_fitness) {
                Ok((individual, fitness))
            } else {
                Ok((best, best_fitness))
            }
        })?;

        (logger)(&format!("evaluated {evaluations} individuals, best fitness: {best_fitness}"));

        Ok((best, best_fitness))
    }
}
