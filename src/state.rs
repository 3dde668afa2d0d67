//! Composite state threaded through the step function
//!
//! The core holds no state of its own. Everything that evolves lives in a
//! [`CoreState`] owned by the caller: the field vector, the named weight
//! scalars, and the observer's controller knobs. Each step returns a fresh
//! triple; the input triple is never touched.

use std::collections::BTreeMap;

use crate::vector::FieldVector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower clamp bound for observer gain.
pub const GAIN_MIN: f32 = 0.5;
/// Upper clamp bound for observer gain.
pub const GAIN_MAX: f32 = 2.0;
/// Lower clamp bound for the latency budget, in milliseconds.
pub const LATENCY_MIN_MS: i32 = 10;
/// Upper clamp bound for the latency budget, in milliseconds.
pub const LATENCY_MAX_MS: i32 = 120;

/// Named weight scalars.
///
/// Only `"beta"` evolves in the minimal core; any other entries ride along
/// untouched across steps. Updates are copy-on-write so a caller's state is
/// never mutated behind its back.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightState {
    scalars: BTreeMap<String, f32>,
}

/// Key of the one weight the minimal step evolves.
pub const BETA_KEY: &str = "beta";

impl WeightState {
    /// Create an empty weight map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a scalar by name.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.scalars.get(name).copied()
    }

    /// Look up a scalar by name, defaulting to 0.0 when absent.
    pub fn scalar_or_zero(&self, name: &str) -> f32 {
        self.get(name).unwrap_or(0.0)
    }

    /// Builder-style insert, consuming self.
    pub fn with_scalar(mut self, name: impl Into<String>, value: f32) -> Self {
        self.scalars.insert(name.into(), value);
        self
    }

    /// New map equal to this one with a single entry replaced.
    pub fn replaced(&self, name: &str, value: f32) -> Self {
        let mut scalars = self.scalars.clone();
        scalars.insert(name.to_string(), value);
        Self { scalars }
    }

    /// Number of named entries.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// True when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.scalars.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Feedback-controller knobs adapted from the similarity score.
///
/// `gain` scales the input's contribution to the drift; `latency_budget_ms`
/// is the controller's time allowance. Both stay inside their clamp ranges
/// after every step. `emphasis_band` is read by the resonance term but
/// never written by the core.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverState {
    /// Input gain, clamped to [`GAIN_MIN`, `GAIN_MAX`].
    pub gain: f32,
    /// Relative frequency band (low, high) weighting the resonance term.
    pub emphasis_band: (f32, f32),
    /// Latency allowance in ms, clamped to [`LATENCY_MIN_MS`, `LATENCY_MAX_MS`].
    pub latency_budget_ms: i32,
}

impl Default for ObserverState {
    fn default() -> Self {
        Self {
            gain: 1.0,
            emphasis_band: (0.5, 4.0),
            latency_budget_ms: 40,
        }
    }
}

/// The composite (field, weights, observer) triple threaded between steps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreState {
    /// The evolving field vector Phi.
    pub phi: FieldVector,
    /// Named weight scalars.
    pub weights: WeightState,
    /// Feedback-controller knobs.
    pub observer: ObserverState,
}

impl CoreState {
    /// A zero field of the given dimensionality with default weights and
    /// observer, the usual starting point for a simulation stream.
    pub fn zeros(dims: usize) -> Self {
        Self {
            phi: FieldVector::zeros(dims),
            weights: WeightState::new(),
            observer: ObserverState::default(),
        }
    }
}

/// Per-step outputs that are not carried forward as state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepMetrics {
    /// Cosine similarity between the updated field and the input.
    pub similarity: f32,
    /// The beta weight just written into the next state.
    pub beta: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_replaced_is_copy_on_write() {
        let w = WeightState::new()
            .with_scalar("beta", 0.25)
            .with_scalar("tau", 3.0);

        let next = w.replaced("beta", -0.5);

        assert_eq!(w.scalar_or_zero("beta"), 0.25);
        assert_eq!(next.scalar_or_zero("beta"), -0.5);
        // Unrelated key passes through
        assert_eq!(next.scalar_or_zero("tau"), 3.0);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_missing_scalar_defaults_to_zero() {
        let w = WeightState::new();
        assert!(w.is_empty());
        assert_eq!(w.get(BETA_KEY), None);
        assert_eq!(w.scalar_or_zero(BETA_KEY), 0.0);
    }

    #[test]
    fn test_observer_defaults() {
        let o = ObserverState::default();
        assert_eq!(o.gain, 1.0);
        assert_eq!(o.emphasis_band, (0.5, 4.0));
        assert_eq!(o.latency_budget_ms, 40);
    }

    #[test]
    fn test_zeros_state() {
        let state = CoreState::zeros(16);
        assert_eq!(state.phi.dims(), 16);
        assert!(state.phi.is_zero());
        assert!(state.weights.is_empty());
    }
}
