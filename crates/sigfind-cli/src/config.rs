//! CLI configuration (TOML)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog used when `--catalog` is not given
    pub catalog: Option<PathBuf>,
    /// Output format used when `--format` is not given
    pub format: OutputFormat,
    /// Disable colored console output
    pub no_color: bool,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sigfind").join("config.toml"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load the explicit config, or the default one if present.
    ///
    /// An explicit path must load; a broken default config only warns.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            "catalog = \"signatures.json\"\nformat = \"tsv\"\n",
        )
        .unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("signatures.json")));
        assert_eq!(config.format, OutputFormat::Tsv);
        assert!(!config.no_color);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "format = \"xml\"\n").unwrap();
        assert!(Config::load(temp_file.path()).is_err());
    }

    #[test]
    fn test_discover_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::discover(Some(&missing)).is_err());
    }
}
