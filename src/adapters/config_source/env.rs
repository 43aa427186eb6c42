//! Process environment configuration source.

use crate::domain::ports::ConfigSource;

/// Reads values from the process environment.
///
/// Unset variables and variables that are not valid UTF-8 both read as `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvConfigSource {
    fn name(&self) -> &'static str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
