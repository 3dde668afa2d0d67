//! Fluctuational core - the single-step state transition
//!
//! One Euler-Maruyama step of an Ornstein-Uhlenbeck-like process with
//! state-dependent drift, plus a scalar weight update and a similarity-driven
//! feedback adjustment of the observer knobs. The engine holds only the
//! configuration; all evolving state is threaded by the caller.

use crate::config::CoreConfig;
use crate::error::CoreError;
use crate::noise::NoiseSource;
use crate::state::{
    CoreState, ObserverState, StepMetrics, BETA_KEY, GAIN_MAX, GAIN_MIN, LATENCY_MAX_MS,
    LATENCY_MIN_MS,
};
use crate::vector::FieldVector;

/// Relaxation rate of the intrinsic decay toward zero.
const RELAXATION_RATE: f32 = 0.05;
/// Coupling strength of the input-matching part of the resonance term.
const COUPLING: f32 = 0.6;
/// Weight of the band-emphasis part of the resonance term.
const BAND_WEIGHT: f32 = 0.2;
/// Strength of the ordering bias in the weight update.
const ORDER_RATE: f32 = 0.1;
/// Gain adjustment per unit of similarity error.
const GAIN_FEEDBACK: f32 = 0.05;
/// Latency adjustment (ms) per unit of similarity error.
const LATENCY_FEEDBACK: f32 = -5.0;

/// The fluctuational core.
///
/// Construct once with a [`CoreConfig`], then call [`step`](Self::step) in a
/// loop, feeding each returned [`CoreState`] back in. The engine itself is
/// immutable and freely shareable; independent simulation streams need only
/// their own state and [`NoiseSource`].
#[derive(Clone, Debug)]
pub struct FluctuationCore {
    config: CoreConfig,
}

impl FluctuationCore {
    /// Create a core from a validated configuration.
    pub fn new(config: CoreConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a core with the reference parameters at the given dimensionality.
    pub fn with_dims(dims: usize) -> Result<Self, CoreError> {
        Self::new(CoreConfig::new(dims))
    }

    /// Get configuration.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Get field dimensionality.
    pub fn dims(&self) -> usize {
        self.config.dims
    }

    // =========================================================================
    // STEP
    // =========================================================================

    /// Advance the composite state by one time step.
    ///
    /// Computes the drift (relaxation + gain-scaled input + resonance),
    /// applies an Euler-Maruyama update to the field, evolves the `"beta"`
    /// weight, scores the new field against the input by cosine similarity,
    /// and adjusts the observer knobs toward the target similarity.
    ///
    /// Neither `state` nor `input` is mutated; a fresh state is returned
    /// along with the step's metrics. For a fixed sequence of noise draws
    /// the function is deterministic.
    pub fn step(
        &self,
        state: &CoreState,
        input: &FieldVector,
        dt: f32,
        noise: &mut dyn NoiseSource,
    ) -> Result<(CoreState, StepMetrics), CoreError> {
        self.check_shape(state.phi.dims())?;
        self.check_shape(input.dims())?;
        if !(dt > 0.0) {
            return Err(CoreError::InvalidArgument(format!(
                "dt must be > 0, got {dt}"
            )));
        }

        let phi = &state.phi;
        let observer = &state.observer;

        // Drift: A(Phi) + G(o)*v + R(Phi, v, o)
        let drift = self
            .relaxation(phi)
            .add(&input.scale(observer.gain))
            .add(&self.resonance(phi, input, observer));

        // Field update (Euler-Maruyama)
        let xi_phi = noise.sample_vector(self.config.dims);
        let phi_next = phi
            .add(&drift.scale(dt))
            .add(&xi_phi.scale(self.config.sigma_phi * dt.sqrt()));

        // Weight update: gradient proxy (Phi - v) plus ordering bias,
        // reduced to means, applied to the one scalar "beta"
        let grad_mean = phi.sub(input).mean();
        let order_mean = self.order_term(phi, input).mean();
        let beta_old = state.weights.scalar_or_zero(BETA_KEY);
        let xi_w = noise.sample_scalar();
        let beta_next = beta_old
            + (-self.config.eta * grad_mean + self.config.alpha * order_mean) * dt
            + self.config.sigma_w * dt.sqrt() * xi_w;
        let weights_next = state.weights.replaced(BETA_KEY, beta_next);

        // Resonance score and observer feedback
        let similarity = phi_next.cosine_similarity(input);
        let observer_next = self.observer_feedback(similarity, observer);

        Ok((
            CoreState {
                phi: phi_next,
                weights: weights_next,
                observer: observer_next,
            },
            StepMetrics {
                similarity,
                beta: beta_next,
            },
        ))
    }

    // =========================================================================
    // DRIFT TERMS
    // =========================================================================

    /// Intrinsic dynamics: a weak pull toward the zero field.
    fn relaxation(&self, phi: &FieldVector) -> FieldVector {
        phi.scale(-RELAXATION_RATE)
    }

    /// Band emphasis: the mid-band scalar stands in for a band-pass filter.
    fn band_emphasis(&self, phi: &FieldVector, band: (f32, f32)) -> FieldVector {
        let (lo, hi) = band;
        phi.scale(0.5 * (lo + hi))
    }

    /// Resonance: input matching plus band emphasis.
    fn resonance(
        &self,
        phi: &FieldVector,
        input: &FieldVector,
        observer: &ObserverState,
    ) -> FieldVector {
        input
            .sub(phi)
            .scale(COUPLING)
            .add(&self.band_emphasis(phi, observer.emphasis_band).scale(BAND_WEIGHT))
    }

    /// Ordering bias: a weak pull of the weights toward input agreement.
    fn order_term(&self, phi: &FieldVector, input: &FieldVector) -> FieldVector {
        input.sub(phi).scale(ORDER_RATE)
    }

    // =========================================================================
    // OBSERVER FEEDBACK
    // =========================================================================

    /// Adjust gain and latency budget toward the target similarity.
    ///
    /// The latency delta truncates toward zero when converted to whole
    /// milliseconds, so sub-millisecond corrections are dropped rather than
    /// rounded up. The emphasis band is copied unchanged.
    fn observer_feedback(&self, similarity: f32, observer: &ObserverState) -> ObserverState {
        let error = similarity - self.config.target_similarity;
        let gain = (observer.gain + GAIN_FEEDBACK * error).clamp(GAIN_MIN, GAIN_MAX);
        let latency = (observer.latency_budget_ms + (LATENCY_FEEDBACK * error) as i32)
            .clamp(LATENCY_MIN_MS, LATENCY_MAX_MS);
        ObserverState {
            gain,
            emphasis_band: observer.emphasis_band,
            latency_budget_ms: latency,
        }
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    fn check_shape(&self, dims: usize) -> Result<(), CoreError> {
        if dims != self.config.dims {
            return Err(CoreError::ShapeMismatch {
                expected: self.config.dims,
                actual: dims,
            });
        }
        Ok(())
    }
}
