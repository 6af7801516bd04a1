use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::RECENT_ENTRIES;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Optional settings for the `play` front-end, read from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub snapshot_path: Option<String>,
    pub recent_entries: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            recent_entries: RECENT_ENTRIES,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = GameConfig::from_yaml_str("seed: 7\n").expect("valid yaml");
        assert_eq!(
            config,
            GameConfig {
                seed: Some(7),
                ..GameConfig::default()
            }
        );
        assert_eq!(config.recent_entries, RECENT_ENTRIES);
    }

    #[test]
    fn test_full_config() {
        let yaml = "snapshot_path: saves/rps.yaml\nrecent_entries: 3\n";
        let config = GameConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.snapshot_path.as_deref(), Some("saves/rps.yaml"));
        assert_eq!(config.recent_entries, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(matches!(
            GameConfig::from_yaml_str("recent_entries: many"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
