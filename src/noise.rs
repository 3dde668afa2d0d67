//! Noise sources for the diffusion terms
//!
//! The reference behavior drew from a process-wide generator, which makes
//! parallel simulation streams irreproducible. Here the random source is an
//! explicit argument to [`step`](crate::FluctuationCore::step): each stream
//! owns its own generator, and tests can substitute [`ZeroNoise`] to make
//! the step a deterministic pure function.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::vector::FieldVector;

/// Source of standard-normal draws for the diffusion terms.
pub trait NoiseSource {
    /// Draw a vector of `dims` independent standard-normal samples.
    fn sample_vector(&mut self, dims: usize) -> FieldVector;

    /// Draw one standard-normal sample.
    fn sample_scalar(&mut self) -> f32;
}

/// Gaussian noise backed by a seedable PRNG.
#[derive(Clone, Debug)]
pub struct GaussianNoise {
    rng: StdRng,
}

impl GaussianNoise {
    /// Reproducible source from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl NoiseSource for GaussianNoise {
    fn sample_vector(&mut self, dims: usize) -> FieldVector {
        FieldVector::from_values(
            (0..dims)
                .map(|_| self.rng.sample::<f32, _>(StandardNormal))
                .collect(),
        )
    }

    fn sample_scalar(&mut self) -> f32 {
        self.rng.sample(StandardNormal)
    }
}

/// All-zero noise, collapsing the step to its deterministic drift.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample_vector(&mut self, dims: usize) -> FieldVector {
        FieldVector::zeros(dims)
    }

    fn sample_scalar(&mut self) -> f32 {
        0.0
    }
}
