pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod stores;

pub use codec::{deserialize, serialize};
pub use config::SnapshotConfig;
pub use error::SnapshotError;
pub use models::{Cell, Sheet, Workbook};
pub use stores::{FileStore, MemoryStore, SnapshotFormat, SnapshotStore};

use types::SessionState;

/// Encodes `state` and writes it to `store`.
pub fn save_session(
    store: &mut dyn SnapshotStore,
    state: &SessionState,
) -> Result<(), SnapshotError> {
    store.save(&serialize(state))
}

/// Reads and decodes a session from `store`. The caller's current state is
/// not touched; swap it in only on `Ok`.
pub fn load_session(store: &dyn SnapshotStore) -> Result<SessionState, SnapshotError> {
    let workbook = store.load()?;
    deserialize(&workbook)
}
