//! Configuration loading and settings resolution for the metrics reporter.
//!
//! Uses serde_yaml to load the YAML configuration file, with
//! `METRUX_APP_NAME` and `METRUX_ACTIVE` environment variables overriding
//! the values from the file.

mod document;
mod env;
mod error;
mod prefix;
mod resolver;

pub use document::{ActiveValue, ConfigDocument};
pub use env::{ACTIVE_KEY, APP_NAME_KEY, DEPLOYMENT_ENV_KEYS, EnvTable, is_present};
pub use error::ConfigError;
pub use prefix::{metric_prefix, underscore, without_accent};
pub use resolver::{ResolvedSettings, SettingsResolver, resolve};

use tracing::{debug, info};

/// Load the configuration file at `path` and resolve it against `env`.
///
/// The environment section of the file is chosen from `METRUX_ENV`,
/// `RACK_ENV` or `RAILS_ENV`, whichever is set first.
pub fn load_settings(path: &str, env: &EnvTable) -> Result<ResolvedSettings, ConfigError> {
    let document = load_document(path, None, env)?;
    resolve_settings(&document, env)
}

/// Load the configuration file at `path`.
///
/// `environment` names the section to read; when `None` it is taken from
/// the deployment environment variables in `env`.
pub fn load_document(
    path: &str,
    environment: Option<&str>,
    env: &EnvTable,
) -> Result<ConfigDocument, ConfigError> {
    let environment = match environment {
        Some(name) => Some(name),
        None => env.deployment_env(),
    };
    ConfigDocument::load(path, environment)
}

/// Resolve a loaded document against `env`, logging the outcome.
pub fn resolve_settings(
    document: &ConfigDocument,
    env: &EnvTable,
) -> Result<ResolvedSettings, ConfigError> {
    debug!(section = ?document.section, "Resolving metrics settings");

    let settings = resolve(document, env)?;

    info!(
        app_name = %settings.app_name(),
        active = settings.active(),
        prefix = %settings.prefix(),
        "Metrics settings resolved"
    );

    Ok(settings)
}
