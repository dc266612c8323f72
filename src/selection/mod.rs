//! Contains selection strategies which decide how genetic material of the current generation
//! is passed to the next one.

mod roulette_wheel;
pub use self::roulette_wheel::*;
