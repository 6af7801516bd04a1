use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("No saved data found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("No snapshot has been stored")]
    Empty,

    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {}: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Snapshot has no {0:?} sheet")]
    MissingSheet(String),

    #[error("Unsupported snapshot file type: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

impl SnapshotError {
    /// True when there was simply nothing to load.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SnapshotError::NotFound(_) | SnapshotError::Empty)
    }
}
