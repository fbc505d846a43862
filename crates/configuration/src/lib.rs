use config::{Environment, File, FileFormat};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Analytics, Config, Logging, Storage};

/// The file looked up in the working directory, without its extension.
pub const DEFAULT_CONFIG_FILE: &str = "journal";

/// Loads the journal configuration.
///
/// This function orchestrates the layered configuration loading:
/// 1. Built-in defaults for every setting.
/// 2. An optional `journal.toml` in the working directory (or `path`, when given).
/// 3. Environment variables (e.g., `JOURNAL__STORAGE__DATA_DIR=...`).
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix("JOURNAL").separator("__"))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Parses configuration from TOML text alone, without the environment layer.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if !config.analytics.risk_free_rate.is_finite() {
        return Err(ConfigError::ValidationError(
            "analytics.risk_free_rate must be a finite number".to_string(),
        ));
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }
    if config.storage.trades_index.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.trades_index must name a file".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("index.directory"));
        assert_eq!(config.storage.trades_index, PathBuf::from("trades-index.json"));
        assert_eq!(config.analytics.risk_free_rate, 0.0);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn sections_override_individual_fields() {
        let config = parse_config(
            r#"
            [storage]
            data_dir = "/srv/journal"

            [analytics]
            risk_free_rate = 0.02

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/journal"));
        assert_eq!(config.storage.account_config, PathBuf::from("account-config.json"));
        assert_eq!(config.analytics.risk_free_rate, 0.02);
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn unreadable_toml_is_a_load_error() {
        let err = parse_config("[storage\ndata_dir = 1").unwrap_err();

        assert!(matches!(err, ConfigError::LoadError(_)));
        assert!(err.to_string().starts_with("Failed to read journal settings"));
    }

    #[test]
    fn blank_log_level_is_rejected() {
        let result = parse_config("[logging]\nlevel = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
