//! Contains functionality to run a generational evolution.

use crate::utils::{Float, GenericError, GenericResult, Random};
use std::fmt::{Display, Formatter};

mod config;
pub use self::config::*;

mod engine;
pub use self::engine::*;

/// Represents a candidate solution with an opaque genetic representation.
pub trait Individual: Send + Sync {
    /// Creates a deep copy of the individual.
    fn deep_copy(&self) -> Self;
}

/// Provides the way to create a population of individuals from scratch.
pub trait PopulationInitializer {
    /// An individual type.
    type Individual: Individual;

    /// Creates a new population of the given size.
    fn generate(&self, size: usize, random: &(dyn Random)) -> Vec<Self::Individual>;
}

/// Provides the way to apply a random change to a single individual.
pub trait Mutation {
    /// An individual type.
    type Individual: Individual;

    /// Returns a mutated version of the given individual.
    fn mutate(&self, individual: Self::Individual, random: &(dyn Random)) -> Self::Individual;
}

/// Provides the way to combine genetic material of two parents into a new individual.
pub trait Crossover {
    /// An individual type.
    type Individual: Individual;

    /// Produces a new individual from the given parents.
    fn recombine(&self, parents: (&Self::Individual, &Self::Individual), random: &(dyn Random)) -> Self::Individual;
}

/// Provides the way to pick parent couples for the next generation.
pub trait Selection {
    /// Returns parent index couples, one couple per new population slot.
    ///
    /// An implementation must return exactly `weights.len()` couples with each index
    /// within `[0, weights.len())` range.
    fn select(&self, weights: &[Float], random: &(dyn Random)) -> GenericResult<Vec<(usize, usize)>>;
}

/// An error which can be returned by the evolution engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvolutionError {
    /// A generation transition was requested while all fitness slots are still unset.
    EmptyFitness,

    /// A pluggable strategy returned data which violates the engine contract.
    ContractViolation {
        /// A name of the offending strategy.
        strategy: &'static str,
        /// A violated constraint description.
        reason: String,
    },

    /// A pluggable strategy failed internally.
    Strategy {
        /// A name of the failed strategy.
        name: &'static str,
        /// An underlying strategy error.
        source: GenericError,
    },

    /// An engine was built with an invalid configuration.
    Configuration(GenericError),
}

impl Display for EvolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolutionError::EmptyFitness => {
                write!(f, "cannot create a new generation: no fitness was set for the current one")
            }
            EvolutionError::ContractViolation { strategy, reason } => {
                write!(f, "{strategy} violates the engine contract: {reason}")
            }
            EvolutionError::Strategy { name, source } => write!(f, "{name} failed: {source}"),
            EvolutionError::Configuration(error) => write!(f, "invalid configuration: {error}"),
        }
    }
}

impl std::error::Error for EvolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvolutionError::Strategy { source, .. } => Some(source),
            EvolutionError::Configuration(error) => Some(error),
            _ => None,
        }
    }
}
