//! CLI configuration loaded from `slider.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slider_core::BeatmapDifficulty;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "slider.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub difficulty: DifficultyOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

/// Difficulty settings replacing those of every loaded scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyOverrides {
    pub circle_size: Option<f64>,
    pub overall_difficulty: Option<f64>,
    pub slider_multiplier: Option<f64>,
    pub slider_tick_rate: Option<f64>,
}

impl DifficultyOverrides {
    pub fn apply(&self, difficulty: &mut BeatmapDifficulty) {
        if let Some(cs) = self.circle_size {
            difficulty.circle_size = cs;
        }
        if let Some(od) = self.overall_difficulty {
            difficulty.overall_difficulty = od;
        }
        if let Some(multiplier) = self.slider_multiplier {
            difficulty.slider_multiplier = multiplier;
        }
        if let Some(rate) = self.slider_tick_rate {
            difficulty.slider_tick_rate = rate;
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicit config, or the default file if present
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let config = Self::load(path)?;
            info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        match Self::load(Path::new(DEFAULT_CONFIG_FILE)) {
            Ok(config) => {
                info!("Loaded config from {}", DEFAULT_CONFIG_FILE);
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
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.output.color);
        assert!(!config.output.json);
        assert_eq!(config.difficulty, DifficultyOverrides::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = CliConfig::parse(
            r#"
            [output]
            color = false

            [difficulty]
            overall_difficulty = 8.0
            "#,
        )
        .unwrap();
        assert!(!config.output.color);
        assert!(!config.output.json);
        assert_eq!(config.difficulty.overall_difficulty, Some(8.0));
        assert_eq!(config.difficulty.circle_size, None);
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = DifficultyOverrides {
            circle_size: Some(4.0),
            slider_tick_rate: Some(2.0),
            ..Default::default()
        };
        let mut difficulty = BeatmapDifficulty::default();
        overrides.apply(&mut difficulty);
        assert_eq!(difficulty.circle_size, 4.0);
        assert_eq!(difficulty.slider_tick_rate, 2.0);
        assert_eq!(difficulty.overall_difficulty, 5.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\njson = true").unwrap();
        let config = CliConfig::load_or_default(Some(file.path())).unwrap();
        assert!(config.output.json);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load_or_default(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_invalid_config_fails() {
        assert!(CliConfig::parse("[output]\ncolor = \"yes\"").is_err());
    }
}
