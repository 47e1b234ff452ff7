//! Item identifiers.
//!
//! Drive ids are opaque strings assigned by the store. We never parse them;
//! the only id with meaning is the reserved root alias, which every store
//! must accept in place of the real root id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved token that stores resolve to their root item.
pub const ROOT_ALIAS: &str = "root";

/// An opaque item identifier.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an id handed out by a store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id (UUIDv7 simple hex) for stores that assign their own.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().as_simple().to_string())
    }

    /// The reserved root alias.
    pub fn root() -> Self {
        Self(ROOT_ALIAS.to_string())
    }

    /// True if this is the root alias (not the root's real id).
    pub fn is_root_alias(&self) -> bool {
        self.0 == ROOT_ALIAS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 characters, for human display only.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.short())
    }
}
