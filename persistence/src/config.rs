use std::path::PathBuf;

use crate::{error::SnapshotError, stores::FileStore};

pub const SNAPSHOT_PATH_ENV: &str = "RPS_SNAPSHOT_PATH";
pub const DEFAULT_SNAPSHOT_FILE: &str = "rps_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    pub path: PathBuf,
}

impl SnapshotConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let path = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var(SNAPSHOT_PATH_ENV) {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_SNAPSHOT_FILE.to_string()
        };

        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn open_store(&self) -> Result<FileStore, SnapshotError> {
        FileStore::new(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argument_wins() {
        let config = SnapshotConfig::from_cli_or_env_or_yaml(
            Some("cli.json".to_string()),
            Some("yaml.json".to_string()),
        );
        assert_eq!(config.path, PathBuf::from("cli.json"));
        assert!(config.open_store().is_ok());
    }
}
