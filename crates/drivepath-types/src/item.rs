//! Item metadata.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// Kind tag the drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Metadata of an item as fetched from the store.
///
/// Content is never part of this; fetching an item does not download it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub mime_type: String,
    /// Parent ids. Order carries no meaning; empty means this is a root.
    #[serde(default)]
    pub parents: Vec<ItemId>,
    #[serde(default)]
    pub trashed: bool,
}

impl Item {
    /// A parentless item has exactly one path: the empty string.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// Metadata for an item that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub mime_type: String,
    pub parents: Vec<ItemId>,
}

impl NewItem {
    pub fn new(title: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mime_type: mime_type.into(),
            parents: Vec::new(),
        }
    }

    /// A folder under a single parent.
    pub fn folder(title: impl Into<String>, parent: ItemId) -> Self {
        Self::new(title, FOLDER_MIME_TYPE).with_parent(parent)
    }

    pub fn with_parent(mut self, parent: ItemId) -> Self {
        self.parents.push(parent);
        self
    }
}

/// Title-equality search over the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Exact title to match.
    pub title: String,
    /// Whether trashed items are returned.
    pub include_trashed: bool,
}

impl ItemQuery {
    /// Non-trashed items whose title equals `title`.
    pub fn title_eq(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            include_trashed: false,
        }
    }

    pub fn including_trashed(mut self, include: bool) -> Self {
        self.include_trashed = include;
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        item.title == self.title && (self.include_trashed || !item.trashed)
    }
}
