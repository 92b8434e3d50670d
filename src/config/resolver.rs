//! Resolution of the final metrics settings.

use serde::Serialize;

use super::env::{ACTIVE_KEY, APP_NAME_KEY};
use super::prefix::metric_prefix;
use super::{ConfigDocument, ConfigError, EnvTable};

/// Settings handed to the metrics reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSettings {
    app_name: String,
    active: bool,
    prefix: String,
}

impl ResolvedSettings {
    /// Application name, never empty.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Whether metrics reporting is enabled.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Namespace for metric keys, derived from the app name.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Builds [`ResolvedSettings`] from a configuration document and an
/// environment snapshot. Environment values take precedence.
#[derive(Debug, Clone, Copy)]
pub struct SettingsResolver<'a> {
    config: &'a ConfigDocument,
    env: &'a EnvTable,
}

impl<'a> SettingsResolver<'a> {
    pub fn new(config: &'a ConfigDocument, env: &'a EnvTable) -> Self {
        Self { config, env }
    }

    /// Resolve all settings, failing only when no app name is available.
    pub fn resolve(&self) -> Result<ResolvedSettings, ConfigError> {
        let app_name = self.app_name()?.to_string();
        let prefix = metric_prefix(&app_name);

        Ok(ResolvedSettings {
            active: self.active(),
            app_name,
            prefix,
        })
    }

    fn app_name(&self) -> Result<&'a str, ConfigError> {
        self.env
            .get(APP_NAME_KEY)
            .or_else(|| self.config.app_name())
            .ok_or(ConfigError::AppNameNotFound)
    }

    // A set METRUX_ACTIVE decides on its own, even when it is not "true".
    fn active(&self) -> bool {
        match self.env.get(ACTIVE_KEY) {
            Some(value) => value == "true",
            None => self.config.is_active(),
        }
    }
}

/// Shorthand for `SettingsResolver::new(config, env).resolve()`.
pub fn resolve(config: &ConfigDocument, env: &EnvTable) -> Result<ResolvedSettings, ConfigError> {
    SettingsResolver::new(config, env).resolve()
}
