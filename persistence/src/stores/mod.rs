pub mod file_store;
pub mod memory_store;
pub mod traits;

pub use file_store::{FileStore, SnapshotFormat};
pub use memory_store::MemoryStore;
pub use traits::SnapshotStore;
