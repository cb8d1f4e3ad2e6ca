//! Settings file
//!
//! Optional TOML file with game and logging settings. Missing keys take their
//! defaults; a missing file means all defaults.

use crate::core::DEFAULT_MAX_MISTAKES;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "hangman.toml";

/// Why the settings could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// JSON catalog to play from; the embedded one when absent
    pub catalog_path: Option<PathBuf>,
    pub max_mistakes: u32,
    pub log_path: PathBuf,
    /// Filter directive used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            max_mistakes: DEFAULT_MAX_MISTAKES,
            log_path: PathBuf::from("hangman.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Syntax errors, wrong value types and unknown keys. Ranges are not
    /// checked here; see [`Settings::validate`].
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and validate a settings file
    ///
    /// # Errors
    ///
    /// `Io`, `Parse` or `Invalid`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load `explicit` if given, else `hangman.toml` if it exists, else defaults
    ///
    /// # Errors
    ///
    /// As [`Settings::from_file`]; an explicit path that does not exist is an
    /// error, a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// `Invalid` when `max_mistakes` is 0 or `log_level` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_mistakes == 0 {
            return Err(ConfigError::Invalid(
                "max_mistakes must be at least 1".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.max_mistakes, 6);
        assert_eq!(settings.catalog_path, None);
        assert_eq!(settings.log_path, PathBuf::from("hangman.log"));
        assert_eq!(settings.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let settings = Settings::from_toml(
            r#"
            max_mistakes = 8
            catalog_path = "words/custom.json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.max_mistakes, 8);
        assert_eq!(settings.catalog_path, Some(PathBuf::from("words/custom.json")));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("max_mistake = 3").is_err());
    }

    #[test]
    fn zero_mistakes_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_mistakes = 0").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn from_file_reads_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\nlog_path = \"/tmp/h.log\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_path, PathBuf::from("/tmp/h.log"));
    }

    #[test]
    fn malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_mistakes = \"six\"").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::discover(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
