//! # drivepath-kernel
//!
//! Path-based addressing over a drive that only knows ids.
//!
//! The drive stores items that point at their parents by id, may have several
//! parents, and can only be searched by exact title. This crate layers paths
//! on top of that:
//! - id → every path the item is reachable under
//! - path → the item(s) reachable there
//! - path → a folder, created on demand with all missing ancestors
//!
//! ```no_run
//! use drivepath_kernel::{DrivePaths, MemoryStore, PathOps};
//!
//! # async fn demo() -> drivepath_kernel::DriveResult<()> {
//! let paths = DrivePaths::new(MemoryStore::new());
//! let folder = paths.ensure_dir("reports/2024").await?;
//! assert!(paths.path_exists("/reports/2024/").await?);
//! assert!(paths.get_paths(&folder).await?.contains("reports/2024"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod store;

pub use config::{ConfigError, DriveConfig, ResolverConfig};
pub use error::{DriveError, DriveResult};
pub use paths::{DrivePaths, PathOps};
pub use store::{ItemStore, MemoryStore, Snapshot, SnapshotStore, StoreError, StoreResult};

pub use drivepath_types::{FOLDER_MIME_TYPE, Item, ItemId, ItemQuery, NewItem};
