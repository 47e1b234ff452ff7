//! Shared item and path types for drivepath.
//!
//! This crate is the leaf of the workspace: it describes what lives in an
//! id-addressed drive and how paths are spelled. It knows nothing about
//! stores or resolution.
//!
//! # Model
//!
//! ```text
//! Item (ItemId) ← file or folder in the drive
//!     └── title: display name, not unique among siblings
//!     └── parents: zero or more ItemIds (zero = root)
//!     └── mime_type: kind tag, folders use FOLDER_MIME_TYPE
//!
//! Path ← "a/b/c", titles joined by '/', root is ""
//!     └── one item may have many paths (multiple parents)
//!     └── one path may name many items (duplicate titles)
//! ```
//!
//! # Key Types
//!
//! |-------------------|----------------------------------------------|
//! | Type              | Purpose                                      |
//! |-------------------|----------------------------------------------|
//! | [`ItemId`]        | Opaque store-assigned identifier             |
//! | [`Item`]          | Fetched metadata (id + title + parents)      |
//! | [`NewItem`]       | Metadata for an item not yet persisted       |
//! | [`ItemQuery`]     | Title-equality search filter                 |
//! |-------------------|----------------------------------------------|

pub mod ids;
pub mod item;
pub mod path;

pub use ids::{ItemId, ROOT_ALIAS};
pub use item::{FOLDER_MIME_TYPE, Item, ItemQuery, NewItem};
