//! Settings file for generation defaults and input bounds.
//!
//! ```toml
//! [defaults]
//! length = 25
//! count = 5
//! avoid_same_face = true
//! avoid_same_axis = true
//! seed = 42
//!
//! [limits]
//! max_count = 100
//! ```
//!
//! Every key is optional; missing keys keep the built-in values.

use crate::builder::{BatchRequest, DEFAULT_COUNT, DEFAULT_LENGTH};
use crate::core::Constraints;
use crate::limits::Limits;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: Defaults,
    pub limits: Limits,
}

/// Values used for any request field not given explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub length: usize,
    pub count: usize,
    pub avoid_same_face: bool,
    pub avoid_same_axis: bool,
    pub seed: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        let constraints = Constraints::default();
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            avoid_same_face: constraints.avoid_same_face,
            avoid_same_axis: constraints.avoid_same_axis,
            seed: None,
        }
    }
}

impl Defaults {
    pub fn constraints(&self) -> Constraints {
        Constraints::new(self.avoid_same_face, self.avoid_same_axis)
    }

    /// The request these defaults describe, before any bounds check.
    pub fn request(&self) -> BatchRequest {
        BatchRequest {
            count: self.count,
            length: self.length,
            constraints: self.constraints(),
            seed: self.seed,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_uses_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.defaults.request(), BatchRequest::default());
        assert_eq!(settings.limits, Limits::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_overrides_named_keys() {
        let settings = Settings::from_toml(
            r#"
            [defaults]
            length = 25
            avoid_same_axis = true
            seed = 42

            [limits]
            max_count = 100
            "#,
        )
        .unwrap();

        assert_eq!(settings.defaults.length, 25);
        assert_eq!(settings.defaults.count, 10);
        assert_eq!(settings.defaults.constraints(), Constraints::new(true, true));
        assert_eq!(settings.defaults.seed, Some(42));
        assert_eq!(settings.limits.max_count, 100);
        assert_eq!(settings.limits.max_length, 200);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrambler.toml");
        fs::write(&path, "[defaults]\ncount = 3\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.defaults.count, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[defaults]\nlength = \"long\"\n").unwrap();
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
