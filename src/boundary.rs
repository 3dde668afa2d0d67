//! Boundary conditions handed to the core from a transmission layer
//!
//! A [`BoundaryCondition`] carries the fluctuation parameters an outer
//! channel negotiates for a simulation stream. Only `seed` is consumed
//! today, by building the stream's noise source; `phase_drift` and
//! `entropy_rate` are carried for future coupling into the drift.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::noise::GaussianNoise;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fluctuation boundary condition for one simulation stream.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundaryCondition {
    /// Seed for the stream's noise source.
    pub seed: u64,
    /// Phase drift per second.
    pub phase_drift: f32,
    /// Rate of change of fluctuation energy.
    pub entropy_rate: f32,
}

impl BoundaryCondition {
    /// Condition with an explicit seed and small default drift rates.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            phase_drift: 1e-3,
            entropy_rate: 1e-2,
        }
    }

    /// Fresh condition seeded from the wall clock.
    pub fn from_time() -> Self {
        let ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::from_seed((ns ^ 0x9E37_79B9_7F4A_7C15) & 0xFFFF_FFFF)
    }

    /// Build the noise source this condition parameterizes.
    pub fn noise(&self) -> GaussianNoise {
        GaussianNoise::from_seed(self.seed)
    }
}

impl Default for BoundaryCondition {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseSource;

    #[test]
    fn test_from_seed_defaults() {
        let bc = BoundaryCondition::from_seed(99);
        assert_eq!(bc.seed, 99);
        assert_eq!(bc.phase_drift, 1e-3);
        assert_eq!(bc.entropy_rate, 1e-2);
    }

    #[test]
    fn test_noise_is_reproducible_per_seed() {
        let bc = BoundaryCondition::from_seed(1234);
        let mut a = bc.noise();
        let mut b = bc.noise();
        assert_eq!(a.sample_vector(8), b.sample_vector(8));
    }

    #[test]
    fn test_from_time_seed_fits_32_bits() {
        let bc = BoundaryCondition::from_time();
        assert!(bc.seed <= u32::MAX as u64);
    }
}
