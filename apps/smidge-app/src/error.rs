use thiserror::Error;

use smidge_core::error::ConfigError;
use smidge_noise::model::NoiseError;

/// CLI error type encompassing all failure conditions of a masking run.
///
/// Everything here is a local validation failure surfaced immediately; the
/// binary prints the message to standard error and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read '{path}': {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Noise error: {0}")]
    Noise(#[from] NoiseError),

    #[error("Column '{column}' not found in the input file")]
    ColumnNotFound { column: String },

    #[error("Column '{column}' is not numeric: '{value}' at line {line}")]
    NotNumeric {
        column: String,
        value: String,
        line: usize,
    },

    #[error("Unknown preset '{name}' (expected light, moderate, or aggressive)")]
    UnknownPreset { name: String },
}
