//! Path-layer error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors from resolving or materializing paths.
#[derive(Debug, Error)]
pub enum DriveError {
    /// Path or id does not resolve to any item.
    #[error("not found: {0}")]
    NotFound(String),

    /// Items exist at the path, but none of them is a folder.
    #[error("not a folder: {0}")]
    NotAFolder(String),

    /// Path cannot name a folder (it has an empty segment).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The parent graph loops back on itself.
    #[error("parent cycle through item {0}")]
    CycleDetected(String),

    /// Ancestry is deeper than the configured limit.
    #[error("ancestry of {id} exceeds {limit} levels")]
    DepthExceeded { id: String, limit: usize },

    /// Store failure other than a missing id.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DriveError {
    /// Create a NotFound error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create a NotAFolder error.
    pub fn not_a_folder(path: impl Into<String>) -> Self {
        Self::NotAFolder(path.into())
    }

    /// Create an InvalidPath error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Create a CycleDetected error.
    pub fn cycle_detected(id: impl Into<String>) -> Self {
        Self::CycleDetected(id.into())
    }

    /// True for [`DriveError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Path-layer result type.
pub type DriveResult<T> = Result<T, DriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_subject() {
        assert_eq!(DriveError::not_found("a/b").to_string(), "not found: a/b");
        assert_eq!(DriveError::not_a_folder("a").to_string(), "not a folder: a");
        let depth = DriveError::DepthExceeded {
            id: "x".into(),
            limit: 3,
        };
        assert_eq!(depth.to_string(), "ancestry of x exceeds 3 levels");
    }

    #[test]
    fn test_store_errors_pass_through() {
        let err: DriveError = StoreError::request("quota exceeded").into();
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "store request failed: quota exceeded");
    }
}
