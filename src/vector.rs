//! Field Vector - dense intensity vector for fluctuational fields
//!
//! The atomic numeric unit of the core. Values are plain f32; the step
//! function never needs more structure than elementwise arithmetic, a dot
//! product, and a couple of reductions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense f32 vector of fixed length.
///
/// All combining operations return a new vector; the operands are never
/// mutated. This keeps the step function's "no in-place mutation" contract
/// trivially true.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldVector {
    values: Vec<f32>,
}

impl FieldVector {
    /// Create a new zero-initialized vector.
    pub fn zeros(dims: usize) -> Self {
        Self {
            values: vec![0.0; dims],
        }
    }

    /// Create from raw f32 values.
    pub fn from_values(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Get dimensions.
    #[inline]
    pub fn dims(&self) -> usize {
        self.values.len()
    }

    /// Get value at index.
    #[inline]
    pub fn get(&self, idx: usize) -> f32 {
        self.values[idx]
    }

    /// Set value at index.
    #[inline]
    pub fn set(&mut self, idx: usize, value: f32) {
        self.values[idx] = value;
    }

    /// Borrow the underlying values.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Check if all values are zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Elementwise sum with another vector.
    pub fn add(&self, other: &FieldVector) -> FieldVector {
        debug_assert_eq!(self.dims(), other.dims());
        FieldVector {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Elementwise difference (self - other).
    pub fn sub(&self, other: &FieldVector) -> FieldVector {
        debug_assert_eq!(self.dims(), other.dims());
        FieldVector {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }

    /// Scale all values by a factor.
    pub fn scale(&self, factor: f32) -> FieldVector {
        FieldVector {
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &FieldVector) -> f32 {
        debug_assert_eq!(self.dims(), other.dims());
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Compute L2 norm.
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Mean over all components. Zero for an empty vector.
    pub fn mean(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }

    /// Cosine similarity with another vector.
    ///
    /// Defined as 0.0 (not an error) when either vector has zero norm.
    pub fn cosine_similarity(&self, other: &FieldVector) -> f32 {
        let na = self.norm();
        let nb = other.norm();
        if na == 0.0 || nb == 0.0 {
            return 0.0;
        }
        self.dot(other) / (na * nb)
    }
}

impl Default for FieldVector {
    fn default() -> Self {
        Self::zeros(64)
    }
}
