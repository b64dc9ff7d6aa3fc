use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Seeded category sampler, one per game.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSampler {
    seed: u64,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn pick_ids(
        self,
        pool: &[CategoryId],
        count: usize,
    ) -> Result<Vec<CategoryId>, ConfigError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        pick_ids(pool, count, &mut rng)
    }
}

/// Picks `count` distinct entries of `pool`, uniformly and without replacement.
///
/// Partial Fisher-Yates: only the last `count` slots get shuffled, and those are what is returned.
pub fn pick_ids<R: Rng + ?Sized>(
    pool: &[CategoryId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>, ConfigError> {
    if count > pool.len() {
        return Err(ConfigError::NotEnoughCategories {
            requested: count,
            available: pool.len(),
        });
    }

    let mut shuffled = pool.to_vec();
    let min = shuffled.len() - count;
    for i in (min..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    let picked = shuffled.split_off(min);
    log::debug!("picked categories: {:?}", picked);
    Ok(picked)
}
