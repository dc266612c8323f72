#[cfg(test)]
#[path = "../../tests/unit/selection/roulette_wheel_test.rs"]
mod roulette_wheel_test;

use crate::evolution::Selection;
use crate::utils::{Float, GenericError, GenericResult, Random};
use rand_distr::{Distribution, WeightedAliasIndex};

/// A fitness proportionate selection: both parents of every couple are drawn independently with
/// a probability proportional to their selection weights.
#[derive(Default)]
pub struct RouletteWheelSelection {}

impl Selection for RouletteWheelSelection {
    fn select(&self, weights: &[Float], random: &(dyn Random)) -> GenericResult<Vec<(usize, usize)>> {
        let distribution = WeightedAliasIndex::new(weights.to_vec())
            .map_err(|err| GenericError::from(format!("cannot create a weighted distribution: {err}")))?;
        let mut rng = random.get_rng();

        Ok((0..weights.len()).map(|_| (distribution.sample(&mut rng), distribution.sample(&mut rng))).collect())
    }
}
