//! Item store capability trait.
//!
//! This is the whole of what the path layer needs from a drive: fetch by id,
//! search by title, create. Authentication, transport, and retries live
//! behind an implementation of this trait.

use async_trait::async_trait;
use std::sync::Arc;

use drivepath_types::{Item, ItemId, ItemQuery, NewItem};

use super::StoreResult;

/// Id-addressed item store.
///
/// Implementations must accept [`ItemId::root()`] in `fetch` and in
/// `NewItem::parents`, resolving it to their actual root item.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch an item's metadata. Content is not downloaded.
    ///
    /// Returns `StoreError::NotFound` if the id does not exist.
    async fn fetch(&self, id: &ItemId) -> StoreResult<Item>;

    /// List items matching the query, in store order.
    async fn list(&self, query: &ItemQuery) -> StoreResult<Vec<Item>>;

    /// Create and persist an item, returning it with its assigned id.
    async fn create(&self, item: NewItem) -> StoreResult<Item>;
}

#[async_trait]
impl<T: ItemStore + ?Sized> ItemStore for Arc<T> {
    async fn fetch(&self, id: &ItemId) -> StoreResult<Item> {
        (**self).fetch(id).await
    }

    async fn list(&self, query: &ItemQuery) -> StoreResult<Vec<Item>> {
        (**self).list(query).await
    }

    async fn create(&self, item: NewItem) -> StoreResult<Item> {
        (**self).create(item).await
    }
}
