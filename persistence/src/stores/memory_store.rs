use super::SnapshotStore;
use crate::{error::SnapshotError, models::Workbook};

/// Keeps the last saved workbook in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    workbook: Option<Workbook>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workbook(workbook: Workbook) -> Self {
        Self {
            workbook: Some(workbook),
        }
    }

    pub fn workbook(&self) -> Option<&Workbook> {
        self.workbook.as_ref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, workbook: &Workbook) -> Result<(), SnapshotError> {
        self.workbook = Some(workbook.clone());
        Ok(())
    }

    fn load(&self) -> Result<Workbook, SnapshotError> {
        self.workbook.clone().ok_or(SnapshotError::Empty)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
