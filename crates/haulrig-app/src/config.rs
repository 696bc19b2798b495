//! Configuration management for haulrig
//!
//! Config stored at: ~/.config/haulrig/config.json

use haulrig_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How per-axle loads are estimated during matching
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxleDistributionKind {
    /// Nominal share scaled by a random factor per axle
    #[default]
    Randomized,
    /// Even split, no randomness
    Nominal,
}

impl std::fmt::Display for AxleDistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxleDistributionKind::Randomized => write!(f, "randomized"),
            AxleDistributionKind::Nominal => write!(f, "nominal"),
        }
    }
}

impl std::str::FromStr for AxleDistributionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randomized" | "random" => Ok(AxleDistributionKind::Randomized),
            "nominal" => Ok(AxleDistributionKind::Nominal),
            other => Err(format!("unknown axle distribution: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default catalog file (JSON or TOML)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Axle load estimation used by `match`
    #[serde(default)]
    pub axle_distribution: AxleDistributionKind,

    /// Seed for the randomized distribution (reproducible runs)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_format: default_output_format(),
            axle_distribution: AxleDistributionKind::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulrig");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or default when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulrig Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:            {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(f, "Axle distribution:  {}", self.axle_distribution)?;
        writeln!(
            f,
            "Seed:               {}",
            self.seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(random)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            catalog_path: Some(PathBuf::from("/data/catalog.toml")),
            output_format: OutputFormat::Json,
            axle_distribution: AxleDistributionKind::Nominal,
            seed: Some(11),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"seed": 5}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.axle_distribution, AxleDistributionKind::Randomized);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_distribution_kind_from_str() {
        assert_eq!(
            "Nominal".parse::<AxleDistributionKind>().unwrap(),
            AxleDistributionKind::Nominal
        );
        assert!("moment".parse::<AxleDistributionKind>().is_err());
    }
}
