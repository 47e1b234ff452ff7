//! Id ↔ path resolution.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use drivepath_types::path::{join, last_segment, normalize};
use drivepath_types::{Item, ItemId, ItemQuery};

use super::ops::PathOps;
use crate::config::ResolverConfig;
use crate::error::{DriveError, DriveResult};
use crate::store::{ItemStore, StoreError};

/// Work item for the ancestry walk in [`DrivePaths::get_paths`].
enum Frame {
    /// Fetch the node's parents and schedule the unresolved ones.
    Enter(Item),
    /// All parents resolved; compose the node's own paths.
    Exit(Item),
}

/// Path operations on top of an item store.
///
/// One adapter per store connection. Holds no mutable state of its own, so it
/// can be shared freely behind an `Arc`.
#[derive(Clone)]
pub struct DrivePaths {
    store: Arc<dyn ItemStore>,
    config: ResolverConfig,
}

impl std::fmt::Debug for DrivePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrivePaths")
            .field("store", &"<dyn ItemStore>")
            .field("config", &self.config)
            .finish()
    }
}

impl DrivePaths {
    /// Wrap a store with default resolver settings.
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self::from_arc(Arc::new(store))
    }

    /// Wrap a store that is already shared.
    pub fn from_arc(store: Arc<dyn ItemStore>) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    pub fn with_config(store: Arc<dyn ItemStore>, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Fetch an item by id, mapping a missing id to `DriveError::NotFound`.
    #[tracing::instrument(skip(self, id), fields(id = %id), name = "paths.get_item_by_id")]
    pub async fn get_item_by_id(&self, id: &ItemId) -> DriveResult<Item> {
        match self.store.fetch(id).await {
            Ok(item) => Ok(item),
            Err(StoreError::NotFound(_)) => Err(DriveError::not_found(format!("item {id}"))),
            Err(e) => Err(e.into()),
        }
    }

    /// The root item, fetched through the reserved alias.
    pub async fn root(&self) -> DriveResult<Item> {
        self.get_item_by_id(&ItemId::root()).await
    }

    /// Every path under which `item` is reachable.
    ///
    /// A parentless item has the single path `""`. Otherwise the result is,
    /// for every parent and every path of that parent, the parent path joined
    /// with the item's title. Path sets multiply across shared ancestors, so
    /// heavily multi-parented graphs can produce very large sets.
    ///
    /// Fails with `CycleDetected` if the ancestry loops and `DepthExceeded` if
    /// it is deeper than `max_ancestry_depth`.
    #[tracing::instrument(skip(self, item), fields(item = %item.id), name = "paths.get_paths")]
    pub async fn get_paths(&self, item: &Item) -> DriveResult<BTreeSet<String>> {
        if item.is_root() {
            return Ok(BTreeSet::from([String::new()]));
        }

        let limit = self.config.max_ancestry_depth;
        // Resolved path sets, keyed by real id
        let mut memo: HashMap<ItemId, BTreeSet<String>> = HashMap::new();
        // Parents as referenced (possibly the root alias) → fetched item
        let mut fetched: HashMap<ItemId, Item> = HashMap::new();
        // Nodes entered but not yet exited: exactly the current ancestry chain
        let mut chain: HashSet<ItemId> = HashSet::new();
        let mut stack = vec![Frame::Enter(item.clone())];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(node) => {
                    if memo.contains_key(&node.id) {
                        continue;
                    }
                    if node.is_root() {
                        memo.insert(node.id.clone(), BTreeSet::from([String::new()]));
                        continue;
                    }
                    if chain.len() >= limit {
                        return Err(DriveError::DepthExceeded {
                            id: item.id.to_string(),
                            limit,
                        });
                    }
                    chain.insert(node.id.clone());

                    let parent_ids = node.parents.clone();
                    stack.push(Frame::Exit(node));
                    for parent_id in parent_ids {
                        let parent = match fetched.get(&parent_id) {
                            Some(parent) => parent.clone(),
                            None => {
                                let parent = self.get_item_by_id(&parent_id).await?;
                                fetched.insert(parent_id, parent.clone());
                                parent
                            }
                        };
                        if chain.contains(&parent.id) {
                            return Err(DriveError::cycle_detected(parent.id.as_str()));
                        }
                        if !memo.contains_key(&parent.id) {
                            stack.push(Frame::Enter(parent));
                        }
                    }
                }
                Frame::Exit(node) => {
                    let mut paths = BTreeSet::new();
                    for parent_id in &node.parents {
                        let parent_paths = fetched
                            .get(parent_id)
                            .and_then(|parent| memo.get(&parent.id))
                            .ok_or_else(|| DriveError::not_found(parent_id.as_str()))?;
                        for parent_path in parent_paths {
                            paths.insert(join(parent_path, &node.title));
                        }
                    }
                    chain.remove(&node.id);
                    memo.insert(node.id.clone(), paths);
                }
            }
        }

        let paths = memo
            .remove(&item.id)
            .ok_or_else(|| DriveError::not_found(item.id.as_str()))?;
        tracing::debug!(count = paths.len(), ancestors = fetched.len(), "computed paths");
        Ok(paths)
    }

    /// The first item, in store order, reachable at `path`.
    ///
    /// The empty path is the root and is fetched through the root alias,
    /// never searched for.
    #[tracing::instrument(skip(self), name = "paths.get_item_by_path")]
    pub async fn get_item_by_path(&self, path: &str) -> DriveResult<Item> {
        let target = normalize(path);
        if target.is_empty() {
            return self.root().await;
        }

        for candidate in self.candidates(target).await? {
            if self.reaches(&candidate, target).await? {
                return Ok(candidate);
            }
        }
        Err(DriveError::not_found(target))
    }

    /// Every item reachable at `path`, in store order.
    ///
    /// Empty when nothing matches. Duplicate titles under the same parent make
    /// this return more than one item.
    #[tracing::instrument(skip(self), name = "paths.get_items_by_path")]
    pub async fn get_items_by_path(&self, path: &str) -> DriveResult<Vec<Item>> {
        let target = normalize(path);
        if target.is_empty() {
            return Ok(vec![self.root().await?]);
        }

        let mut found = Vec::new();
        for candidate in self.candidates(target).await? {
            if self.reaches(&candidate, target).await? {
                found.push(candidate);
            }
        }
        if found.len() > 1 {
            tracing::warn!(path = %target, matches = found.len(), "ambiguous path");
        }
        Ok(found)
    }

    /// Whether `target` is among the paths of `candidate`.
    ///
    /// A candidate whose ancestry cannot be fetched (a parent the caller
    /// cannot see, say) is not reachable from the root, so it matches
    /// nothing. Other failures propagate.
    pub(super) async fn reaches(&self, candidate: &Item, target: &str) -> DriveResult<bool> {
        match self.get_paths(candidate).await {
            Ok(paths) => Ok(paths.contains(target)),
            Err(DriveError::NotFound(missing)) => {
                tracing::debug!(candidate = %candidate.id, %missing, "ancestry unreachable, skipping");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Items titled like the last segment of a normalized, non-empty path.
    pub(super) async fn candidates(&self, target: &str) -> DriveResult<Vec<Item>> {
        let query = ItemQuery::title_eq(last_segment(target))
            .including_trashed(self.config.include_trashed);
        let candidates = self.store.list(&query).await?;
        tracing::debug!(title = %query.title, count = candidates.len(), "title candidates");
        Ok(candidates)
    }
}

#[async_trait]
impl PathOps for DrivePaths {
    async fn get_item_by_id(&self, id: &ItemId) -> DriveResult<Item> {
        DrivePaths::get_item_by_id(self, id).await
    }

    async fn get_paths(&self, item: &Item) -> DriveResult<BTreeSet<String>> {
        DrivePaths::get_paths(self, item).await
    }

    async fn get_item_by_path(&self, path: &str) -> DriveResult<Item> {
        DrivePaths::get_item_by_path(self, path).await
    }

    async fn ensure_dir(&self, path: &str) -> DriveResult<Item> {
        DrivePaths::ensure_dir(self, path).await
    }
}
