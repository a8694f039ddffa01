//! YAML configuration.
//!
//! ```yaml
//! store: ~/.local/share/folio/preferences.json
//! content: ./portfolio.yaml
//! output: auto      # auto | term | text | debug
//! width: 80
//! ```
//!
//! Every field is optional. Command-line flags override the file, and the
//! file overrides built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::output::OutputMode;
use crate::store::default_store_path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no preference store path configured and no data directory on this platform")]
    NoStorePath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Preference file. Defaults to `<data_local_dir>/folio/preferences.json`.
    pub store: Option<PathBuf>,
    /// Portfolio YAML. Defaults to the built-in content.
    pub content: Option<PathBuf>,
    pub output: Option<OutputMode>,
    pub width: Option<usize>,
}

impl FolioConfig {
    pub fn from_yaml(source: &str, path: &Path) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&source, path)?;
        config.resolve_relative_to(path.parent().unwrap_or_else(|| Path::new(".")));
        Ok(config)
    }

    /// Loads `explicit` if given, else the default config file if it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Fields set in `other` replace fields in `self`.
    pub fn merge(self, other: FolioConfig) -> Self {
        Self {
            store: other.store.or(self.store),
            content: other.content.or(self.content),
            output: other.output.or(self.output),
            width: other.width.or(self.width),
        }
    }

    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        self.store
            .clone()
            .or_else(default_store_path)
            .ok_or(ConfigError::NoStorePath)
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output.unwrap_or_default()
    }

    // Paths in a config file are relative to the file, not the working directory.
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.store, &mut self.content].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// `<config_dir>/folio/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.yaml"))
}
