//! Snapshot of environment variables used as an override source.

use std::collections::HashMap;
use std::env;

/// Overrides the configured application name.
pub const APP_NAME_KEY: &str = "METRUX_APP_NAME";
/// Overrides the configured active flag.
pub const ACTIVE_KEY: &str = "METRUX_ACTIVE";

/// Variables naming the deployment environment, in lookup order.
pub const DEPLOYMENT_ENV_KEYS: [&str; 3] = ["METRUX_ENV", "RACK_ENV", "RAILS_ENV"];

/// Returns true if the value exists and is not the empty string.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Read-only table of environment variables.
///
/// Built once and handed to the resolver, so resolution never reads the
/// live process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvTable {
    vars: HashMap<String, String>,
}

impl EnvTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Returns the value for `key` if it is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| is_present(Some(*v)))
    }

    /// Returns true if `key` holds a non-empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Name of the deployment environment (e.g. "production"), if any.
    pub fn deployment_env(&self) -> Option<&str> {
        DEPLOYMENT_ENV_KEYS.iter().find_map(|key| self.get(key))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for EnvTable {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}
