//! JSON snapshot backend.
//!
//! A [`MemoryStore`] that is loaded from a JSON file on open and written back
//! after every create. Read-only use never touches the disk. Lets the CLI keep a drive between invocations without
//! talking to a real service.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use drivepath_types::{Item, ItemId, ItemQuery, NewItem};

use super::memory::{MemoryStore, Snapshot};
use crate::store::error::StoreResult;
use crate::store::ops::ItemStore;

/// File-backed drive.
///
/// Writes go to a sibling temp file and are renamed into place.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    inner: MemoryStore,
    // Serializes create+persist so an older snapshot never lands last
    write_lock: Mutex<()>,
}

impl SnapshotStore {
    /// Open the snapshot at `path`, starting an empty drive if it is missing.
    ///
    /// Nothing is written until the first create.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let inner = match fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                tracing::debug!(path = %path.display(), items = snapshot.items.len(), "loaded snapshot");
                MemoryStore::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no snapshot yet, starting empty drive");
                MemoryStore::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory drive behind this store.
    pub fn memory(&self) -> &MemoryStore {
        &self.inner
    }

    async fn persist(&self) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.inner.snapshot())?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ItemStore for SnapshotStore {
    async fn fetch(&self, id: &ItemId) -> StoreResult<Item> {
        self.inner.fetch(id).await
    }

    async fn list(&self, query: &ItemQuery) -> StoreResult<Vec<Item>> {
        self.inner.list(query).await
    }

    async fn create(&self, item: NewItem) -> StoreResult<Item> {
        let _guard = self.write_lock.lock().await;
        let created = self.inner.create(item).await?;
        self.persist().await?;
        Ok(created)
    }
}
