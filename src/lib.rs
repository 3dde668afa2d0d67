//! Fluctuation Core - stochastic field substrate for cognitive architectures
//!
//! The field does not converge - it fluctuates toward agreement.
//!
//! # Core Types
//!
//! - **FieldVector**: Dense f32 vector, the evolving field Phi
//! - **CoreState**: The (field, weights, observer) triple threaded between steps
//! - **FluctuationCore**: One Euler-Maruyama step per call, nothing else
//!
//! # Architecture: Core / Caller / Noise
//!
//! The system separates into three roles:
//!
//! 1. **Core** - The step function: drift, diffusion, weight update, feedback
//! 2. **Caller** - Owns the loop: chooses dt, supplies the input vector,
//!    threads the returned state back in, does all printing
//! 3. **Noise** - An injected [`NoiseSource`]; each simulation stream owns its
//!    own generator so runs are reproducible per seed
//!
//! The core holds only its configuration. Calling `step` never mutates the
//! arguments; a fresh state and a metrics record come back each time.
//!
//! # Core Concepts
//!
//! - **Drift**: relaxation toward zero + gain-scaled input + resonance
//! - **Diffusion**: standard-normal noise scaled by `sigma * sqrt(dt)`
//! - **Resonance score**: cosine similarity of the new field against the
//!   input, steering the observer's gain and latency budget toward 0.8
//! - **Boundary condition**: seed handed in from a transmission layer,
//!   consumed by building the stream's noise source
//!
//! # Example: Driving a Simulation Stream
//!
//! The caller below plays the harness role: a rotating one-hot input, a
//! fixed dt, and the state threaded through each tick.
//!
//! ```rust
//! use fluctuation_core::{BoundaryCondition, CoreState, FieldVector, FluctuationCore};
//!
//! const DIMS: usize = 64;
//!
//! let core = FluctuationCore::with_dims(DIMS).unwrap();
//!
//! // Boundary condition from the outer channel; only the seed is consumed
//! let boundary = BoundaryCondition::from_seed(42);
//! let mut noise = boundary.noise();
//!
//! let mut state = CoreState::zeros(DIMS);
//! let dt = 0.02;
//!
//! for i in 0..150 {
//!     let t = i as f32 * dt;
//!
//!     // Rotating one-hot observation
//!     let mut v = FieldVector::zeros(DIMS);
//!     v.set((t * 3.0) as usize % DIMS, 1.0);
//!
//!     let (next, metrics) = core.step(&state, &v, dt, &mut noise).unwrap();
//!     state = next;
//!
//!     // The caller owns logging; the core never prints
//!     let _ = (metrics.similarity, metrics.beta);
//! }
//!
//! assert_eq!(state.phi.dims(), DIMS);
//! assert!(state.observer.gain >= 0.5 && state.observer.gain <= 2.0);
//! ```
//!
//! # Key Insight
//!
//! The core doesn't know what the input means. It just pulls the field
//! toward whatever the observation is while noise keeps it exploring, and
//! the observer tunes itself from how well the two agree.

mod boundary;
mod config;
mod engine;
mod error;
mod noise;
mod state;
mod vector;

pub use boundary::BoundaryCondition;
pub use config::{CoreConfig, DEFAULT_DIMS};
pub use engine::FluctuationCore;
pub use error::CoreError;
pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};
pub use state::{
    CoreState, ObserverState, StepMetrics, WeightState, BETA_KEY, GAIN_MAX, GAIN_MIN,
    LATENCY_MAX_MS, LATENCY_MIN_MS,
};
pub use vector::FieldVector;
