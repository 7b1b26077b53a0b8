//! Random package sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of package picks for the load search.
pub trait PackageSampler {
    /// Picks `amount` distinct indices from `0..pool_len`.
    ///
    /// Callers never ask for more indices than the pool holds.
    fn sample(&mut self, pool_len: usize, amount: usize) -> Vec<usize>;
}

/// Uniform sampling without replacement from a random number generator.
///
/// # Examples
///
/// ```
/// use u_parcel::search::{PackageSampler, RandomSampler};
///
/// let mut sampler = RandomSampler::seeded(42);
/// let picks = sampler.sample(10, 4);
/// assert_eq!(picks.len(), 4);
/// assert!(picks.iter().all(|&i| i < 10));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Creates a reproducible sampler from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PackageSampler for RandomSampler<R> {
    fn sample(&mut self, pool_len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, pool_len, amount.min(pool_len)).into_vec()
    }
}
