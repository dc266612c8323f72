#[cfg(test)]
#[path = "../../tests/unit/evolution/engine_test.rs"]
mod engine_test;

use super::*;
use crate::utils::{compare_floats, Environment};
use std::sync::Arc;

/// An evolution engine which drives a population of individuals through fitness guided generations.
///
/// The engine dispenses individuals for external evaluation and collects their fitness values
/// back, one individual at a time. Once every individual of the current generation was dispensed,
/// the next request triggers a transition to a new generation.
pub struct GeneticAlgorithm<I>
where
    I: Individual,
{
    population: Vec<I>,
    fitness: Vec<Option<Float>>,
    cursor: usize,
    generation: usize,
    generations: usize,
    objective: Objective,
    elitism: bool,
    mutation: Box<dyn Mutation<Individual = I>>,
    crossover: Box<dyn Crossover<Individual = I>>,
    selection: Box<dyn Selection>,
    environment: Arc<Environment>,
}

impl<I> GeneticAlgorithm<I>
where
    I: Individual,
{
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        population: Vec<I>,
        generations: usize,
        objective: Objective,
        elitism: bool,
        mutation: Box<dyn Mutation<Individual = I>>,
        crossover: Box<dyn Crossover<Individual = I>>,
        selection: Box<dyn Selection>,
        environment: Arc<Environment>,
    ) -> Self {
        let fitness = vec![None; population.len()];

        Self {
            population,
            fitness,
            cursor: 0,
            generation: 0,
            generations,
            objective,
            elitism,
            mutation,
            crossover,
            selection,
            environment,
        }
    }

    /// Returns a copy of the individual to be evaluated next.
    ///
    /// When the current generation is exhausted, creates the next one from the fitness values
    /// collected so far and returns its first individual.
    pub fn get_current_individual(&mut self) -> Result<I, EvolutionError> {
        let size = self.population.len();

        if self.cursor != 0 && self.cursor % size == 0 {
            self.update_population()?;
        }

        let individual = self.population[self.cursor % size].deep_copy();
        self.cursor += 1;

        Ok(individual)
    }

    /// Sets a fitness value for the most recently dispensed individual.
    ///
    /// A repeated call overwrites the previously set value. When nothing was dispensed yet
    /// within the current generation, the value lands in the last fitness slot.
    pub fn update_current_individual_fitness(&mut self, fitness: Float) {
        let size = self.population.len();
        let slot = (self.cursor + size - 1) % size;

        self.fitness[slot] = Some(fitness);
    }

    /// Returns a new individual created from two randomly picked parents of the current
    /// population, leaving the engine state intact.
    pub fn sample_child(&self) -> I {
        let size = self.population.len() as i32;
        let random = self.environment.random.as_ref();

        let first = random.uniform_int(0, size - 1) as usize;
        let second = random.uniform_int(0, size - 1) as usize;

        let child = self.crossover.recombine((&self.population[first], &self.population[second]), random);

        self.mutation.mutate(child, random)
    }

    /// Returns individuals of the current generation.
    pub fn population(&self) -> &[I] {
        self.population.as_slice()
    }

    /// Returns fitness slots of the current generation where `None` stands for a not yet
    /// evaluated individual.
    pub fn fitness(&self) -> &[Option<Float>] {
        self.fitness.as_slice()
    }

    /// Returns a zero-based index of the current generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns an advisory amount of generations the engine was configured with. The value is
    /// not enforced: an evaluation loop is fully controlled by the caller.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Replaces the current generation with a new one keeping the population size intact.
    /// Has no effect on the engine state if any of the steps fails.
    fn update_population(&mut self) -> Result<(), EvolutionError> {
        let size = self.population.len();
        let random = self.environment.random.clone();

        let (best_idx, best_fitness) = self.find_best()?;
        let weights = self.selection_weights();

        let couples = self
            .selection
            .select(weights.as_slice(), random.as_ref())
            .map_err(|source| EvolutionError::Strategy { name: "selection", source })?;

        if couples.len() != size {
            return Err(EvolutionError::ContractViolation {
                strategy: "selection",
                reason: format!("expected {size} parent couples, but got {}", couples.len()),
            });
        }

        if let Some(&(first, second)) = couples.iter().find(|&&(first, second)| first >= size || second >= size) {
            return Err(EvolutionError::ContractViolation {
                strategy: "selection",
                reason: format!("parent couple ({first}, {second}) is out of population bounds"),
            });
        }

        let elite = self.elitism.then(|| self.population[best_idx].deep_copy());

        let mut population = couples
            .iter()
            .map(|&(first, second)| {
                let parents = (&self.population[first], &self.population[second]);
                let child = self.crossover.recombine(parents, random.as_ref());

                self.mutation.mutate(child, random.as_ref())
            })
            .collect::<Vec<_>>();

        if let Some(elite) = elite {
            let slot = random.uniform_int(0, size as i32 - 1) as usize;
            population[slot] = elite;
        }

        self.population = population;
        self.fitness = vec![None; size];
        self.cursor = 0;
        self.generation += 1;

        (self.environment.logger)(&format!("generation {} is created, best fitness: {best_fitness}", self.generation));

        Ok(())
    }

    /// Returns an index and a value of the best fitness with respect to the objective.
    /// Unset fitness slots are ignored.
    fn find_best(&self) -> Result<(usize, Float), EvolutionError> {
        let defined = self.fitness.iter().enumerate().filter_map(|(idx, fitness)| fitness.map(|value| (idx, value)));

        match self.objective {
            Objective::Maximize => defined.max_by(|(_, a), (_, b)| compare_floats(*a, *b)),
            Objective::Minimize => defined.min_by(|(_, a), (_, b)| compare_floats(*a, *b)),
        }
        .ok_or(EvolutionError::EmptyFitness)
    }

    /// Builds selection weights proportional to the fitness values. An unset fitness always
    /// gets a zero weight, a non-finite ratio (e.g. on a zero fitness total) is replaced with
    /// zero, and minimization flips defined weights around one.
    fn selection_weights(&self) -> Vec<Float> {
        let total: Float = self.fitness.iter().flatten().sum();

        self.fitness
            .iter()
            .map(|fitness| match *fitness {
                Some(value) => {
                    let weight = value / total;
                    let weight = if weight.is_finite() { weight } else { 0. };
                    match self.objective {
                        Objective::Maximize => weight,
                        Objective::Minimize => 1. - weight,
                    }
                }
                None => 0.,
            })
            .collect()
    }
}
