use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Credential key name cannot be empty: {0}")]
    EmptyCredentialKey(&'static str),

    #[error("api_key_var and api_secret_var must differ, both are '{0}'")]
    DuplicateCredentialKey(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Project-local configuration directory.
    pub const CONFIG_DIR: &'static str = ".confluent-actions";

    /// Prefix of environment variable overrides.
    pub const ENV_PREFIX: &'static str = "CONFLUENT_ACTIONS_";

    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .confluent-actions/config.yaml
    /// 3. .confluent-actions/local.yaml (optional local overrides)
    /// 4. Environment variables (CONFLUENT_ACTIONS_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{}/config.yaml", Self::CONFIG_DIR)))
            .merge(Yaml::file(format!("{}/local.yaml", Self::CONFIG_DIR)))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let credentials = &config.credentials;
        if credentials.api_key_var.trim().is_empty() {
            return Err(ConfigError::EmptyCredentialKey("api_key_var"));
        }
        if credentials.api_secret_var.trim().is_empty() {
            return Err(ConfigError::EmptyCredentialKey("api_secret_var"));
        }
        if credentials.api_key_var == credentials.api_secret_var {
            return Err(ConfigError::DuplicateCredentialKey(
                credentials.api_key_var.clone(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}
