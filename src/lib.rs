//! This crate exposes a generational genetic algorithm and some helper functionality which can
//! be used to build a solver for optimization problems.
//!
//! The engine does not evaluate individuals on its own: it dispenses them one by one and expects
//! the caller to report fitness values back between dispenses. This way the caller stays in full
//! control of the evaluation process, including how long the evolution runs.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod example;
pub mod prelude;
pub mod selection;
pub mod utils;
