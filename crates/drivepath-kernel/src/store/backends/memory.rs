//! In-memory drive backend.
//!
//! Used for testing and as the state behind [`SnapshotStore`](super::SnapshotStore).
//! All data is ephemeral.

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use drivepath_types::{FOLDER_MIME_TYPE, Item, ItemId, ItemQuery, NewItem};

use crate::store::error::{StoreError, StoreResult};
use crate::store::ops::ItemStore;

/// Title given to the root of a fresh store.
const ROOT_TITLE: &str = "My Drive";

/// Serializable dump of a store's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Real id of the item the root alias resolves to.
    pub root: ItemId,
    /// Every item, in creation order.
    pub items: Vec<Item>,
}

#[derive(Debug)]
struct State {
    root: ItemId,
    items: IndexMap<ItemId, Item>,
}

impl State {
    fn resolve(&self, id: &ItemId) -> ItemId {
        if id.is_root_alias() {
            self.root.clone()
        } else {
            id.clone()
        }
    }
}

/// In-memory drive.
///
/// Thread-safe via internal `RwLock`. List results follow insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a drive containing only a root folder.
    pub fn new() -> Self {
        let root = Item {
            id: ItemId::generate(),
            title: ROOT_TITLE.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: Vec::new(),
            trashed: false,
        };
        let mut items = IndexMap::new();
        let root_id = root.id.clone();
        items.insert(root_id.clone(), root);
        Self {
            state: RwLock::new(State {
                root: root_id,
                items,
            }),
        }
    }

    /// Rebuild a drive from a snapshot.
    ///
    /// Only the root reference is validated; parent links are taken as-is.
    pub fn from_snapshot(snapshot: Snapshot) -> StoreResult<Self> {
        let mut items = IndexMap::with_capacity(snapshot.items.len());
        for item in snapshot.items {
            items.insert(item.id.clone(), item);
        }
        if !items.contains_key(&snapshot.root) {
            return Err(StoreError::invalid_item(format!(
                "snapshot root {} is not among its items",
                snapshot.root
            )));
        }
        Ok(Self {
            state: RwLock::new(State {
                root: snapshot.root,
                items,
            }),
        })
    }

    /// Dump the current contents.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read();
        Snapshot {
            root: state.root.clone(),
            items: state.items.values().cloned().collect(),
        }
    }

    /// Real id of the root item.
    pub fn root_id(&self) -> ItemId {
        self.state.read().root.clone()
    }

    /// Insert or replace an item verbatim.
    ///
    /// Skips all validation, so fixtures can build any parent graph,
    /// including ones a real drive would refuse (cycles, dangling parents).
    pub fn put(&self, item: Item) {
        let mut state = self.state.write();
        state.items.insert(item.id.clone(), item);
    }

    /// Move an item to the trash. Trashed items drop out of default listings.
    pub fn trash(&self, id: &ItemId) -> StoreResult<()> {
        let mut state = self.state.write();
        let id = state.resolve(id);
        let item = state
            .items
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(id.as_str()))?;
        item.trashed = true;
        Ok(())
    }

    /// Number of items, root included.
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Always false: the root is never removed. Kept alongside [`len`](Self::len)
    /// to satisfy clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn fetch(&self, id: &ItemId) -> StoreResult<Item> {
        let state = self.state.read();
        state
            .items
            .get(&state.resolve(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.as_str()))
    }

    async fn list(&self, query: &ItemQuery) -> StoreResult<Vec<Item>> {
        let state = self.state.read();
        Ok(state
            .items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        if new.title.is_empty() {
            return Err(StoreError::invalid_item("title must not be empty"));
        }

        let mut state = self.state.write();

        // Like the real drive, an item created without parents lands in the root
        let parents: Vec<ItemId> = if new.parents.is_empty() {
            vec![state.root.clone()]
        } else {
            new.parents.iter().map(|p| state.resolve(p)).collect()
        };
        if let Some(missing) = parents.iter().find(|p| !state.items.contains_key(*p)) {
            return Err(StoreError::not_found(missing.as_str()));
        }

        let item = Item {
            id: ItemId::generate(),
            title: new.title,
            mime_type: new.mime_type,
            parents,
            trashed: false,
        };
        state.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }
}
