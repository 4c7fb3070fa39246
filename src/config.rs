//! User configuration for the terminal front-end.
//!
//! Read from `config.toml` in the `keycalc` config directory. Every field is
//! optional; a missing file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "keycalc=warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Prompt printed before each line in interactive mode.
    pub prompt: String,
    /// Print the keypad when an interactive session starts.
    pub show_keypad: bool,
    /// Copy every successful result to the clipboard.
    pub copy_on_evaluate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prompt: "> ".to_string(),
            show_keypad: true,
            copy_on_evaluate: false,
        }
    }
}

/// `$XDG_CONFIG_HOME/keycalc/config.toml`, or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
}

impl Config {
    /// Load the config from `path`, or from the default location.
    ///
    /// An explicitly given file must exist. The default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("prompt = \"calc> \"\ncopy_on_evaluate = true\n").unwrap();
        assert_eq!(config.prompt, "calc> ");
        assert!(config.copy_on_evaluate);
        assert!(config.show_keypad);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("show_keypad = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("keycalc-missing-config-for-test.toml");
        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!(
            "keycalc-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "show_keypad = false\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(!config.show_keypad);
    }
}
