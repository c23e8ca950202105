//! User configuration, read from `config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colour the output.
    pub color: bool,
    /// Clear the screen before showing the menu.
    pub clear_screen: bool,
    /// Round rendered numbers to this many decimals.
    pub precision: Option<usize>,
    /// Text shown before reading a menu choice.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: false,
            precision: None,
            prompt: "Choose: ".to_string(),
        }
    }
}

impl Config {
    /// `~/.config/histcalc/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("histcalc").join("config.toml"))
    }

    /// Load the config from `path`, or from [`Config::default_path`].
    ///
    /// A missing file yields the defaults. An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&data)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("color = false\nprecision = 4\n").unwrap();
        assert!(!config.color);
        assert_eq!(config.precision, Some(4));
        assert!(!config.clear_screen);
        assert_eq!(config.prompt, "Choose: ");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("precision = \"four\"").is_err());
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn test_missing_explicit_path() {
        let path = Path::new("/nonexistent/histcalc/config.toml");
        assert!(Config::load(Some(path)).is_err());
    }
}
