use crate::{error::SnapshotError, models::Workbook};

/// Somewhere a [`Workbook`] can be written to and read back from.
///
/// A failed `save` must leave whatever was stored before intact.
pub trait SnapshotStore {
    fn save(&mut self, workbook: &Workbook) -> Result<(), SnapshotError>;

    fn load(&self) -> Result<Workbook, SnapshotError>;

    /// Human-readable location, used in status messages.
    fn location(&self) -> String;
}
