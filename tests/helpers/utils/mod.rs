use crate::utils::{DefaultRandom, Environment, Random};
use std::sync::Arc;

pub mod random;

pub fn create_test_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::default())
}

pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_random(create_test_random())
}

pub fn create_test_environment_with_random(random: Arc<dyn Random + Send + Sync>) -> Arc<Environment> {
    Arc::new(Environment { random, logger: Arc::new(|_| {}) })
}
