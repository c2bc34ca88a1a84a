//! Pre-configured masking levels.
//!
//! Presets are proportional models, so one level behaves sensibly across
//! columns with very different magnitudes (salaries vs. ages). All presets
//! return validated [`NoiseModel`] instances wrapped in `Result`.

use crate::model::{NoiseError, NoiseModel};

/// Light masking: values move by less than 1 percent.
///
/// # Errors
///
/// Never fails for the built-in level; the `Result` mirrors the constructor.
pub fn light() -> Result<NoiseModel, NoiseError> {
    fraction(0.01)
}

/// Moderate masking: values move by less than 5 percent.
///
/// # Errors
///
/// Never fails for the built-in level; the `Result` mirrors the constructor.
pub fn moderate() -> Result<NoiseModel, NoiseError> {
    fraction(0.05)
}

/// Aggressive masking: values move by less than 20 percent.
///
/// # Errors
///
/// Never fails for the built-in level; the `Result` mirrors the constructor.
pub fn aggressive() -> Result<NoiseModel, NoiseError> {
    fraction(0.20)
}

/// Symmetric proportional masking level with factors from `[-f, f)`.
///
/// # Errors
///
/// Returns [`NoiseError::InvalidRange`] if `f` is negative, NaN, or
/// infinite.
pub fn fraction(f: f64) -> Result<NoiseModel, NoiseError> {
    if !f.is_finite() || f < 0.0 {
        return Err(NoiseError::InvalidRange { min: -f, max: f });
    }
    NoiseModel::proportional(-f, f)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
