//! Seeded Gaussian noise for the input current.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::error::{SimError, SimResult};

/// Source of per-step noise samples, injected into a run.
pub trait NoiseGenerator {
    /// Draw `n` samples, continuing the generator's stream.
    fn sample(&mut self, n: usize) -> Vec<f64>;
}

/// Independent standard-normal draws from a ChaCha8 stream.
/// Same seed, same sequence, on every platform.
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    rng: ChaCha8Rng,
}

impl GaussianNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl NoiseGenerator for GaussianNoise {
    fn sample(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.rng.sample(StandardNormal)).collect()
    }
}

/// Noise that is always zero. Useful for deterministic drives.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl NoiseGenerator for Silent {
    fn sample(&mut self, n: usize) -> Vec<f64> {
        vec![0.0; n]
    }
}

/// `n` standard-normal draws from a fresh generator seeded with `seed`.
pub fn sample(n: i64, seed: u64) -> SimResult<Vec<f64>> {
    let n = usize::try_from(n)
        .map_err(|_| SimError::invalid_argument(format!("sample count must be >= 0, got {}", n)))?;
    Ok(GaussianNoise::new(seed).sample(n))
}
