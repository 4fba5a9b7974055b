//! Application configuration loaded from a TOML file.
//!
//! Every key is optional. Relative CSV paths in `[reference]` are resolved
//! against the directory holding the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tax_data::ReferenceDataLoader;
use thiserror::Error;

use crate::input::normalize_code;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Jurisdiction used when `--jurisdiction` is not given, and the
    /// fallback for unknown codes
    #[serde(default)]
    pub default_jurisdiction: Option<String>,

    /// Log filter directive (`info`, `debug`, `tax_core=trace`, ...)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Append log records to this file in addition to stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// CSV overrides for the built-in reference tables
    #[serde(default)]
    pub reference: ReferenceFiles,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_jurisdiction: None,
            log_level: default_log_level(),
            log_file: None,
            reference: ReferenceFiles::default(),
        }
    }
}

/// Reference table files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFiles {
    #[serde(default)]
    pub jurisdictions: Option<PathBuf>,

    #[serde(default)]
    pub category_weights: Option<PathBuf>,

    #[serde(default)]
    pub brackets: Option<PathBuf>,
}

impl AppConfig {
    /// Parses configuration text. Paths are kept exactly as written.
    pub fn from_toml(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml(&text, path)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn rebase(
        &mut self,
        base: &Path,
    ) {
        let join = |p: &mut Option<PathBuf>| {
            if let Some(path) = p.as_mut().filter(|p| p.is_relative()) {
                *path = base.join(&*path);
            }
        };
        join(&mut self.log_file);
        join(&mut self.reference.jurisdictions);
        join(&mut self.reference.category_weights);
        join(&mut self.reference.brackets);
    }

    /// A loader for the reference tables this configuration names.
    pub fn reference_loader(&self) -> ReferenceDataLoader {
        ReferenceDataLoader {
            jurisdictions: self.reference.jurisdictions.clone(),
            category_weights: self.reference.category_weights.clone(),
            brackets: self.reference.brackets.clone(),
            default_jurisdiction: self.default_jurisdiction.as_deref().map(normalize_code),
        }
    }
}
