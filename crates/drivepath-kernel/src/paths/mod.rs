//! Path resolution over an id-addressed drive.
//!
//! - [`PathOps`] - the path-level capability set
//! - [`DrivePaths`] - adapter that implements it on top of an [`ItemStore`](crate::store::ItemStore)
//!
//! ## Design Decisions
//!
//! - **Verify, don't descend**: the store can only search by flat title, so
//!   path → item lists every item titled like the last segment and keeps the
//!   ones whose recomputed path set contains the path.
//! - **Explicit stacks**: ancestry walks and directory creation loop over an
//!   explicit stack instead of recursing, so deep trees can't blow the stack
//!   and no boxed recursive futures are needed.
//! - **No cross-call caching**: every operation reads the store fresh. Within a
//!   single `get_paths` call each ancestor is fetched once.

mod materialize;
mod ops;
mod resolver;

pub use ops::PathOps;
pub use resolver::DrivePaths;
