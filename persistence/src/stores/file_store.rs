use std::{
    fs,
    path::{Path, PathBuf},
};

use super::SnapshotStore;
use crate::{
    error::SnapshotError,
    models::{Workbook, FORMAT_VERSION},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Chosen from the file extension; no extension means JSON.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            None | Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            Some(other) => Err(SnapshotError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn encode(&self, workbook: &Workbook) -> Result<String, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::to_string_pretty(workbook)?,
            SnapshotFormat::Yaml => serde_yaml::to_string(workbook)?,
        })
    }

    pub fn decode(&self, content: &str) -> Result<Workbook, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Json => serde_json::from_str(content)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }
}

/// Snapshot kept in a single JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let format = SnapshotFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileStore {
    /// Writes to a sibling temporary file and renames it over the target, so a
    /// failed write never leaves a half-written snapshot behind.
    fn save(&mut self, workbook: &Workbook) -> Result<(), SnapshotError> {
        let content = self.format.encode(workbook)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content).map_err(|source| {
            tracing::error!("Failed writing {}: {source}", temp_path.display());
            SnapshotError::Unwritable {
                path: self.path.clone(),
                source,
            }
        })?;
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            tracing::error!("Failed replacing {}: {source}", self.path.display());
            let _ = fs::remove_file(&temp_path);
            return Err(SnapshotError::Unwritable {
                path: self.path.clone(),
                source,
            });
        }

        tracing::info!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Workbook, SnapshotError> {
        if !self.exists() {
            return Err(SnapshotError::NotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path).map_err(|source| {
            tracing::error!("Failed reading {}: {source}", self.path.display());
            SnapshotError::Unreadable {
                path: self.path.clone(),
                source,
            }
        })?;
        let workbook = self.format.decode(&content)?;
        if workbook.format_version > FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(workbook.format_version));
        }

        tracing::info!(
            "Loaded snapshot with {} sheets from {}",
            workbook.sheets.len(),
            self.path.display()
        );
        Ok(workbook)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
