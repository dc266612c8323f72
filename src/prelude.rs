//! This module reimports a commonly used types.

pub use crate::evolution::Crossover;
pub use crate::evolution::EvolutionError;
pub use crate::evolution::GeneticAlgorithm;
pub use crate::evolution::GeneticAlgorithmBuilder;
pub use crate::evolution::Individual;
pub use crate::evolution::Mutation;
pub use crate::evolution::Objective;
pub use crate::evolution::PopulationInitializer;
pub use crate::evolution::Selection;

pub use crate::selection::RouletteWheelSelection;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::{Random, RandomGen};
