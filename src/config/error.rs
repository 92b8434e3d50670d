//! Configuration error types.

use thiserror::Error;

/// Configuration loading and resolution error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("app name not found (set METRUX_APP_NAME or app_name in the config file)")]
    AppNameNotFound,
}
