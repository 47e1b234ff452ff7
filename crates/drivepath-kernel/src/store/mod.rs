//! Item store abstraction.
//!
//! - [`ItemStore`] - what the path layer consumes from a drive
//! - [`MemoryStore`] - in-memory drive (testing, fixtures)
//! - [`SnapshotStore`] - in-memory drive persisted to a JSON file

pub mod backends;
mod error;
mod ops;

pub use backends::{MemoryStore, Snapshot, SnapshotStore};
pub use error::{StoreError, StoreResult};
pub use ops::ItemStore;
