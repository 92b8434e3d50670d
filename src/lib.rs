//! Resolution of the settings a metrics reporter needs at startup.
//!
//! Combines a YAML configuration document with environment variable
//! overrides into an application name, an active flag and a metric-key
//! prefix.

pub mod config;

pub use config::{
    ConfigDocument, ConfigError, EnvTable, ResolvedSettings, SettingsResolver, load_document,
    load_settings, resolve_settings,
};
