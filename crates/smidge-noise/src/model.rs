//! Scalar noise models for dataset masking.
//!
//! [`NoiseModel`] is an enum with static dispatch — no trait objects, no
//! vtable overhead. Every sampling method takes an explicit `&mut R: Rng`
//! parameter so that determinism is guaranteed when the same seed is
//! provided.

use rand::Rng;
use rand_distr::{Distribution, Uniform as UniformDist};
use thiserror::Error;

// ---------------------------------------------------------------------------
// NoiseError
// ---------------------------------------------------------------------------

/// Validation errors for noise models and datasets.
///
/// Implements [`Copy`] for cheap propagation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NoiseError {
    /// Range bounds are invalid: `min > max`, or a bound is NaN/infinite.
    #[error("invalid noise range: bounds must be finite with min <= max, got [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    /// The input dataset was empty.
    #[error("dataset is empty")]
    EmptyData,

    /// An input element was NaN or infinite.
    #[error("dataset contains a non-finite value ({value}) at index {index}")]
    NonFinite { index: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// NoiseModel
// ---------------------------------------------------------------------------

/// Scalar noise model for perturbing one value at a time.
///
/// Stateless: both variants draw a fresh independent sample per value, so a
/// model can be shared freely and the only state consumed is the caller's
/// generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoiseModel {
    /// Additive noise drawn uniformly from `[min, max)`.
    Uniform { min: f64, max: f64 },

    /// Fractional noise: a factor drawn uniformly from `[min, max)` is
    /// applied as `value * (1 + factor)`, so the perturbation scales with
    /// the magnitude of the value.
    Proportional { min: f64, max: f64 },
}

impl NoiseModel {
    /// Create an additive uniform noise model over `[min, max)`.
    ///
    /// The degenerate range `min == max` is accepted and always yields `min`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRange`] if `min > max` or either bound
    /// is NaN/infinite.
    pub fn uniform(min: f64, max: f64) -> Result<Self, NoiseError> {
        check_bounds(min, max)?;
        Ok(Self::Uniform { min, max })
    }

    /// Create a proportional noise model with factors from `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidRange`] if `min > max` or either bound
    /// is NaN/infinite.
    pub fn proportional(min: f64, max: f64) -> Result<Self, NoiseError> {
        check_bounds(min, max)?;
        Ok(Self::Proportional { min, max })
    }

    /// Draw one noise sample.
    ///
    /// For [`Proportional`](Self::Proportional) this is the raw factor; use
    /// [`apply`](Self::apply) to attach it to a value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Uniform { min, max } | Self::Proportional { min, max } => draw(min, max, rng),
        }
    }

    /// Apply one draw to a clean value.
    pub fn apply<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        match *self {
            Self::Uniform { .. } => value + self.sample(rng),
            Self::Proportional { .. } => value * (1.0 + self.sample(rng)),
        }
    }
}

fn check_bounds(min: f64, max: f64) -> Result<(), NoiseError> {
    // NaN bounds would slip past a bare `min > max` check.
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(NoiseError::InvalidRange { min, max });
    }
    Ok(())
}

/// `Uniform::new` panics on an empty range, so `min == max` short-circuits
/// to the bound itself.
fn draw<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if min == max {
        return min;
    }
    UniformDist::new(min, max).sample(rng)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
