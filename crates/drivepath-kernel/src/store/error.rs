//! Store error types.

use std::io;
use thiserror::Error;

/// Errors reported by an [`ItemStore`](super::ItemStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with this id.
    #[error("no item with id {0}")]
    NotFound(String),

    /// The store rejected the item metadata.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// The request to the store failed.
    #[error("store request failed: {0}")]
    Request(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot (de)serialization error.
    #[error("snapshot encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a NotFound error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an InvalidItem error.
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }

    /// Create a Request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}

/// Store result type.
pub type StoreResult<T> = Result<T, StoreError>;
