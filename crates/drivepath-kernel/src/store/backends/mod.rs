//! Store backends.
//!
//! Backends implement [`ItemStore`](super::ItemStore) for different storage types.

mod memory;
mod snapshot;

pub use memory::{MemoryStore, Snapshot};
pub use snapshot::SnapshotStore;
