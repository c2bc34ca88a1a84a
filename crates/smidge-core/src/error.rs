use thiserror::Error;

/// Configuration errors for masking plans.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Masking plan has no columns")]
    NoColumns,

    #[error("Duplicate column in masking plan: {0}")]
    DuplicateColumn(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::NoColumns.to_string(),
            "Masking plan has no columns"
        );
        assert_eq!(
            ConfigError::DuplicateColumn("salary".into()).to_string(),
            "Duplicate column in masking plan: salary"
        );
        assert_eq!(
            ConfigError::InvalidValue {
                field: "columns.salary".into(),
                message: "min_noise must be <= max_noise".into()
            }
            .to_string(),
            "Invalid value for columns.salary: min_noise must be <= max_noise"
        );
    }
}
