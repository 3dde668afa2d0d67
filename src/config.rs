//! Core configuration

use crate::error::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conventional field dimensionality.
pub const DEFAULT_DIMS: usize = 1536;

/// Configuration for a fluctuational core.
///
/// `dims` is structural; the remaining knobs parameterize the step and
/// default to the reference values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreConfig {
    /// Number of field dimensions.
    pub dims: usize,

    /// Weight learning rate.
    pub eta: f32,

    /// Order-term weight.
    pub alpha: f32,

    /// Field noise intensity.
    pub sigma_phi: f32,

    /// Weight noise intensity.
    pub sigma_w: f32,

    /// Similarity score the observer feedback steers toward.
    pub target_similarity: f32,
}

impl CoreConfig {
    /// Create a configuration with the reference step parameters.
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            eta: 0.1,
            alpha: 0.05,
            sigma_phi: 0.02,
            sigma_w: 0.01,
            target_similarity: 0.8,
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.dims == 0 {
            return Err(CoreError::InvalidArgument(
                "dims must be > 0".to_string(),
            ));
        }
        if self.sigma_phi < 0.0 || self.sigma_w < 0.0 {
            return Err(CoreError::InvalidArgument(
                "noise intensities must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.dims, DEFAULT_DIMS);
        assert_eq!(config.eta, 0.1);
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.sigma_phi, 0.02);
        assert_eq!(config.sigma_w, 0.01);
        assert_eq!(config.target_similarity, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dims_rejected() {
        let config = CoreConfig::new(0);
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_negative_noise_rejected() {
        let mut config = CoreConfig::new(8);
        config.sigma_phi = -0.1;
        assert!(config.validate().is_err());
    }
}
