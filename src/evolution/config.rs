#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use super::*;
use crate::selection::RouletteWheelSelection;
use crate::utils::Environment;
use std::sync::Arc;

/// Specifies an objective direction used to interpret fitness values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Objective {
    /// A bigger fitness value is considered to be a better one.
    #[default]
    Maximize,
    /// A smaller fitness value is considered to be a better one.
    Minimize,
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Maximize => write!(f, "maximize"),
            Objective::Minimize => write!(f, "minimize"),
        }
    }
}

/// Provides a configurable way to build a genetic algorithm engine.
pub struct GeneticAlgorithmBuilder<I>
where
    I: Individual,
{
    population_size: usize,
    generations: usize,
    objective: Objective,
    elitism: bool,
    initializer: Option<Box<dyn PopulationInitializer<Individual = I>>>,
    mutation: Option<Box<dyn Mutation<Individual = I>>>,
    crossover: Option<Box<dyn Crossover<Individual = I>>>,
    selection: Option<Box<dyn Selection>>,
    environment: Option<Arc<Environment>>,
}

impl<I> Default for GeneticAlgorithmBuilder<I>
where
    I: Individual,
{
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 100,
            objective: Objective::default(),
            elitism: false,
            initializer: None,
            mutation: None,
            crossover: None,
            selection: None,
            environment: None,
        }
    }
}

impl<I> GeneticAlgorithmBuilder<I>
where
    I: Individual,
{
    /// Sets a population size kept constant across all generations. Default is 20.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets an advisory amount of generations to run. Default is 100.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets an objective direction. Default is maximization.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Enables or disables keeping the best individual across generations. Default is disabled.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets a population initializer used to create the very first generation.
    pub fn with_initializer(mut self, initializer: Box<dyn PopulationInitializer<Individual = I>>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Sets a mutation strategy.
    pub fn with_mutation(mut self, mutation: Box<dyn Mutation<Individual = I>>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets a crossover strategy.
    pub fn with_crossover(mut self, crossover: Box<dyn Crossover<Individual = I>>) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Sets a selection strategy replacing the default one.
    pub fn with_selection(mut self, selection: Box<dyn Selection>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Sets an environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds a genetic algorithm engine with the parameters specified, creating the initial
    /// population from the initializer.
    pub fn build(self) -> Result<GeneticAlgorithm<I>, EvolutionError> {
        let environment = self.environment.unwrap_or_else(|| Arc::new(Environment::default()));
        let logger = environment.logger.clone();

        if self.population_size == 0 {
            return Err(EvolutionError::Configuration("population size must be greater than zero".into()));
        }

        if self.generations == 0 {
            return Err(EvolutionError::Configuration("generations amount must be greater than zero".into()));
        }

        let initializer =
            self.initializer.ok_or_else(|| EvolutionError::Configuration("missing a population initializer".into()))?;
        let mutation =
            self.mutation.ok_or_else(|| EvolutionError::Configuration("missing a mutation strategy".into()))?;
        let crossover =
            self.crossover.ok_or_else(|| EvolutionError::Configuration("missing a crossover strategy".into()))?;

        let selection: Box<dyn Selection> = if let Some(selection) = self.selection {
            (logger)("configured to use a custom selection");
            selection
        } else {
            (logger)("configured to use a default roulette wheel selection");
            Box::new(RouletteWheelSelection::default())
        };

        let population = initializer.generate(self.population_size, environment.random.as_ref());
        if population.len() != self.population_size {
            return Err(EvolutionError::ContractViolation {
                strategy: "population initializer",
                reason: format!("expected {} individuals, but got {}", self.population_size, population.len()),
            });
        }

        (logger)(format!("created initial population of size: {}", population.len()).as_str());
        (logger)(
            format!(
                "configured to use {} objective, generations: {}, elitism: {}",
                self.objective, self.generations, self.elitism
            )
            .as_str(),
        );

        Ok(GeneticAlgorithm::new(
            population,
            self.generations,
            self.objective,
            self.elitism,
            mutation,
            crossover,
            selection,
            environment,
        ))
    }
}
