use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_min_noise() -> f64 {
    -0.1
}
const fn default_max_noise() -> f64 {
    0.1
}

// ---------------------------------------------------------------------------
// PlanMeta
// ---------------------------------------------------------------------------

/// Descriptive metadata for a masking plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanMeta {
    pub name: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// ColumnSpec
// ---------------------------------------------------------------------------

/// One column to perturb and the noise range to use for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// CSV header of the target column.
    pub name: String,

    /// Minimum noise value (default: -0.1).
    #[serde(default = "default_min_noise")]
    pub min_noise: f64,

    /// Maximum noise value (default: 0.1).
    #[serde(default = "default_max_noise")]
    pub max_noise: f64,

    /// Apply noise as a fraction of each value instead of an absolute offset.
    #[serde(default)]
    pub proportional: bool,
}

// ---------------------------------------------------------------------------
// MaskPlan
// ---------------------------------------------------------------------------

/// Masking plan loaded from TOML: a root seed plus per-column noise ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskPlan {
    #[serde(default)]
    pub meta: PlanMeta,

    /// Root seed for the run. Per-column generators are derived from it, so
    /// one seed reproduces the whole plan. Entropy-initialized when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl MaskPlan {
    /// Validate the plan. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        let mut seen = std::collections::HashSet::new();
        for spec in &self.columns {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "columns.name".into(),
                    message: "column name must not be empty".into(),
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateColumn(spec.name.clone()));
            }
            if !spec.min_noise.is_finite()
                || !spec.max_noise.is_finite()
                || spec.min_noise > spec.max_noise
            {
                return Err(ConfigError::InvalidValue {
                    field: format!("columns.{}", spec.name),
                    message: format!(
                        "noise range must be finite with min_noise <= max_noise, got [{}, {}]",
                        spec.min_noise, spec.max_noise
                    ),
                });
            }
        }
        Ok(())
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let plan: Self = toml::from_str(&content)?;
        plan.validate()?;
        Ok(plan)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
