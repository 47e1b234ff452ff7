//! Path operations trait.

use async_trait::async_trait;
use std::collections::BTreeSet;

use drivepath_types::{Item, ItemId};

use crate::error::DriveResult;

/// Path-based addressing over an id-based drive.
///
/// Paths are `/`-joined titles; leading and trailing separators are ignored
/// and the root is `""`. Neither direction is unique: an item with several
/// parents has several paths, and duplicate titles let one path name several
/// items.
#[async_trait]
pub trait PathOps: Send + Sync {
    /// Fetch an item by id (metadata only).
    ///
    /// Fails with `NotFound` if the id does not exist.
    async fn get_item_by_id(&self, id: &ItemId) -> DriveResult<Item>;

    /// Every normalized path under which `item` is reachable.
    async fn get_paths(&self, item: &Item) -> DriveResult<BTreeSet<String>>;

    /// The first item (in store order) reachable at `path`.
    ///
    /// Fails with `NotFound` if nothing is.
    async fn get_item_by_path(&self, path: &str) -> DriveResult<Item>;

    /// The folder at `path`, creating it and any missing ancestors.
    async fn ensure_dir(&self, path: &str) -> DriveResult<Item>;

    // ========================================================================
    // Convenience methods (default implementations)
    // ========================================================================

    /// Like [`get_item_by_path`](Self::get_item_by_path), with `NotFound`
    /// turned into `None`. Other failures still propagate.
    async fn find_item_by_path(&self, path: &str) -> DriveResult<Option<Item>> {
        match self.get_item_by_path(path).await {
            Ok(item) => Ok(Some(item)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check if a path resolves to anything.
    async fn path_exists(&self, path: &str) -> DriveResult<bool> {
        Ok(self.find_item_by_path(path).await?.is_some())
    }
}
