//! Decoded configuration document.

use serde::Deserialize;
use serde_yaml::Value;
use std::fs;

use super::ConfigError;
use super::env::is_present;

/// Settings read from the YAML configuration file.
///
/// Every key is optional here; missing values are either filled from the
/// environment or reported by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigDocument {
    /// Human-facing application name, also the source of the metric prefix.
    pub app_name: Option<String>,
    /// Whether metrics reporting is enabled.
    pub active: Option<ActiveValue>,
    /// Logging verbosity for the command line tool: "debug", "info", ...
    pub log_level: Option<String>,
    /// Environment section the document was read from, `None` for the root.
    #[serde(skip)]
    pub section: Option<String>,
}

/// Text spellings of "off", compared case-insensitively.
///
/// YAML 1.1 loaders read the unquoted forms as booleans; serde_yaml keeps
/// them as strings.
const FALSE_WORDS: [&str; 5] = ["false", "no", "off", "n", "0"];

/// Value of the `active` key: a YAML boolean, a number or a text value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ActiveValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ActiveValue {
    /// Whether the value turns reporting on.
    ///
    /// `false`, zero, empty text and false-like words are not present.
    pub fn is_present(&self) -> bool {
        match self {
            ActiveValue::Flag(flag) => *flag,
            ActiveValue::Number(n) => *n != 0.0,
            ActiveValue::Text(text) => {
                let text = text.trim();
                is_present(Some(text))
                    && !FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(text))
            }
        }
    }
}

impl From<bool> for ActiveValue {
    fn from(flag: bool) -> Self {
        ActiveValue::Flag(flag)
    }
}

impl ConfigDocument {
    /// Load the document from a YAML file.
    ///
    /// The file is either flat or split into sections keyed by deployment
    /// environment. When `environment` names a section that exists, that
    /// section is decoded; otherwise the root is.
    pub fn load(path: &str, environment: Option<&str>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content, environment)
    }

    /// Decode the document from YAML text, see [`ConfigDocument::load`].
    pub fn from_yaml_str(content: &str, environment: Option<&str>) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let root: Value = serde_yaml::from_str(content)?;
        if root.is_null() {
            return Ok(Self::default());
        }

        let section = environment.and_then(|name| {
            root.get(name)
                .filter(|v| v.is_mapping())
                .map(|section| (name, section))
        });
        match section {
            Some((name, section)) => {
                let mut document: Self = serde_yaml::from_value(section.clone())?;
                document.section = Some(name.to_string());
                Ok(document)
            }
            None => Ok(serde_yaml::from_value(root)?),
        }
    }

    /// Returns the app name if it is present.
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref().filter(|name| is_present(Some(*name)))
    }

    /// Returns the active flag, `false` unless the value is present.
    pub fn is_active(&self) -> bool {
        self.active.as_ref().is_some_and(ActiveValue::is_present)
    }
}
