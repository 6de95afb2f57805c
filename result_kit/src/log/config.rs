use super::Level;
use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Prefix of the environment variables read by [`LogConfig::from_env`].
pub const ENV_PREFIX: &str = "RESULT_KIT_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogConfigError {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for LogConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}

/// Settings for a [`Logger`](super::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
pub struct LogConfig {
    /// Writes below this level are suppressed.
    #[builder(default)]
    #[serde(default)]
    pub level: Level,
    /// Render logged values with `{:#?}` instead of `{:?}`.
    #[builder(default)]
    #[serde(default)]
    pub pretty: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Reads `RESULT_KIT_LOG_LEVEL` and `RESULT_KIT_LOG_PRETTY`, falling
    /// back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, LogConfigError> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
