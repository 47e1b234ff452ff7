//! Directory materialization.
//!
//! `ensure_dir` probes the target path, then each parent in turn, until one
//! resolves (the root always does). The segments it walked past are then
//! created top-down. Nothing is rolled back: if a create fails midway, the
//! folders made so far stay, and the next call picks up from them.

use drivepath_types::path::{normalize, split_last};
use drivepath_types::{Item, NewItem};

use super::resolver::DrivePaths;
use crate::error::{DriveError, DriveResult};
use crate::store::ItemStore;

impl DrivePaths {
    /// The folder at `path`, creating it and any missing ancestors.
    ///
    /// Idempotent: an existing folder is returned as-is and nothing is
    /// created. When several items sit at a path the first folder among them
    /// is used; if none of them is a folder this fails with `NotAFolder`.
    /// Paths with an empty inner segment (`a//b`) fail with `InvalidPath`
    /// since no folder can be titled `""`.
    #[tracing::instrument(skip(self), name = "paths.ensure_dir")]
    pub async fn ensure_dir(&self, path: &str) -> DriveResult<Item> {
        let target = normalize(path);
        if !target.is_empty() && target.split('/').any(str::is_empty) {
            return Err(DriveError::invalid_path(target));
        }

        // Walk up until something exists, remembering the names to create
        let mut missing: Vec<&str> = Vec::new();
        let mut current = target;
        let mut parent = loop {
            if current.is_empty() {
                break self.root().await?;
            }
            if let Some(folder) = self.existing_folder(current).await? {
                break folder;
            }
            let (rest, name) = split_last(current);
            missing.push(name);
            current = normalize(rest);
        };

        if missing.is_empty() {
            tracing::debug!(id = %parent.id, "folder already exists");
            return Ok(parent);
        }

        for name in missing.into_iter().rev() {
            let created = self
                .store()
                .create(NewItem::folder(name, parent.id.clone()))
                .await?;
            tracing::info!(id = %created.id, parent = %parent.id, title = %name, "created folder");
            parent = created;
        }
        Ok(parent)
    }

    /// First folder at `path` in store order, `None` if nothing is there.
    ///
    /// Matching is the same as [`DrivePaths::get_item_by_path`], so anything
    /// that lookup finds is reused here rather than created again.
    async fn existing_folder(&self, path: &str) -> DriveResult<Option<Item>> {
        let mut occupied = false;
        for candidate in self.candidates(path).await? {
            if !self.reaches(&candidate, path).await? {
                continue;
            }
            if candidate.is_folder() {
                return Ok(Some(candidate));
            }
            occupied = true;
        }
        if occupied {
            Err(DriveError::not_a_folder(path))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathOps;
    use crate::store::MemoryStore;
    use drivepath_types::ItemId;
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryStore>, DrivePaths) {
        let store = Arc::new(MemoryStore::new());
        let paths = DrivePaths::from_arc(store.clone());
        (store, paths)
    }

    #[tokio::test]
    async fn test_creates_every_missing_level() {
        let (store, paths) = setup();
        let c = paths.ensure_dir("a/b/c").await.unwrap();
        assert_eq!(store.len(), 4);
        assert!(c.is_folder());

        let b = store.fetch(&c.parents[0]).await.unwrap();
        let a = store.fetch(&b.parents[0]).await.unwrap();
        assert_eq!((a.title.as_str(), b.title.as_str(), c.title.as_str()), ("a", "b", "c"));
        assert_eq!(a.parents, vec![store.root_id()]);
        assert_eq!(b.parents, vec![a.id.clone()]);
        assert_eq!(c.parents, vec![b.id.clone()]);
    }

    #[tokio::test]
    async fn test_idempotent() {
        let (store, paths) = setup();
        let first = paths.ensure_dir("x/y").await.unwrap();
        let count = store.len();
        let second = paths.ensure_dir("/x/y/").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.len(), count);
    }

    #[tokio::test]
    async fn test_reuses_existing_prefix() {
        let (store, paths) = setup();
        let a = paths.ensure_dir("a").await.unwrap();
        let b = paths.ensure_dir("a/b").await.unwrap();
        assert_eq!(b.parents, vec![a.id]);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_path_is_root_and_creates_nothing() {
        let (store, paths) = setup();
        let root = paths.ensure_dir("/").await.unwrap();
        assert_eq!(root.id, store.root_id());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_created_folder_resolves_back() {
        let (_store, paths) = setup();
        let made = paths.ensure_dir("docs/2024/q1").await.unwrap();
        let found = paths.get_item_by_path("docs/2024/q1").await.unwrap();
        assert_eq!(found.id, made.id);
        assert!(paths.get_paths(&found).await.unwrap().contains("docs/2024/q1"));
    }

    #[tokio::test]
    async fn test_file_in_the_way_is_not_a_folder() {
        let (store, paths) = setup();
        store
            .create(NewItem::new("notes", "text/plain").with_parent(ItemId::root()))
            .await
            .unwrap();

        let err = paths.ensure_dir("notes/today").await.unwrap_err();
        assert!(matches!(err, DriveError::NotAFolder(p) if p == "notes"));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_prefers_folder_over_same_named_file() {
        let (store, paths) = setup();
        store
            .create(NewItem::new("mixed", "text/plain").with_parent(ItemId::root()))
            .await
            .unwrap();
        let folder = store
            .create(NewItem::folder("mixed", ItemId::root()))
            .await
            .unwrap();

        let got = paths.ensure_dir("mixed").await.unwrap();
        assert_eq!(got.id, folder.id);
    }

    #[tokio::test]
    async fn test_unreachable_namesake_does_not_block_reuse() {
        let (store, paths) = setup();
        let a = store.create(NewItem::folder("a", ItemId::root())).await.unwrap();
        let b = store.create(NewItem::folder("b", a.id.clone())).await.unwrap();
        store.put(Item {
            id: ItemId::new("stray"),
            title: "b".to_string(),
            mime_type: drivepath_types::FOLDER_MIME_TYPE.to_string(),
            parents: vec![ItemId::new("hidden")],
            trashed: false,
        });
        let count = store.len();

        assert_eq!(paths.ensure_dir("a/b").await.unwrap().id, b.id);
        assert_eq!(store.len(), count);

        let c = paths.ensure_dir("a/b/c").await.unwrap();
        assert_eq!(c.parents, vec![b.id]);
        assert_eq!(store.len(), count + 1);
    }

    #[tokio::test]
    async fn test_empty_inner_segment_is_rejected() {
        let (store, paths) = setup();
        let err = paths.ensure_dir("a//b").await.unwrap_err();
        assert!(matches!(err, DriveError::InvalidPath(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_via_trait_object() {
        let (_store, paths) = setup();
        let ops: Arc<dyn PathOps> = Arc::new(paths);
        let made = ops.ensure_dir("t/o").await.unwrap();
        assert!(ops.path_exists("t/o").await.unwrap());
        assert_eq!(ops.get_item_by_path("t/o").await.unwrap().id, made.id);
    }
}
