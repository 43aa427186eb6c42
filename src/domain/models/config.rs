use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the action module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Where the credentials action looks up its values
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Names of the configuration keys holding the Confluent credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Key holding the API key
    #[serde(default = "default_api_key_var", deserialize_with = "key_name")]
    pub api_key_var: String,

    /// Key holding the API secret
    #[serde(default = "default_api_secret_var", deserialize_with = "key_name")]
    pub api_secret_var: String,
}

/// Default key for the Confluent Cloud API key.
pub const DEFAULT_API_KEY_VAR: &str = "CONFLUENT_CLOUD_API_KEY";

/// Default key for the Confluent Cloud API secret.
pub const DEFAULT_API_SECRET_VAR: &str = "CONFLUENT_CLOUD_API_SECRET";

fn default_api_key_var() -> String {
    DEFAULT_API_KEY_VAR.to_string()
}

fn default_api_secret_var() -> String {
    DEFAULT_API_SECRET_VAR.to_string()
}

/// Read a key name from any scalar. Environment overrides arrive already
/// parsed, so `CONFLUENT_ACTIONS_CREDENTIALS__API_KEY_VAR=12345` is a number.
fn key_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(name) => name,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key_var: default_api_key_var(),
            api_secret_var: default_api_secret_var(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (console only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
