//! Flood-fill diff engine for mtdiff.
//!
//! The [`DiffWalker`] starts at an origin block position and explores
//! outward through the 6-connected block grid, bounded by the extent of
//! the old snapshot: a position whose block is absent from the old store
//! stops the frontier there. Each reachable block is fetched from both
//! snapshots, decoded through one shared node type registry, and compared
//! voxel by voxel; every mismatch is streamed to a [`DiffSink`] as a
//! [`NodeChange`].
//!
//! # Key Types
//!
//! - [`DiffWalker`] — the traversal engine; one instance per comparison run
//! - [`NodeChange`] — a single changed voxel: absolute position + type names
//! - [`DiffSink`] / [`TextSink`] / [`JsonSink`] — the output boundary
//! - [`WalkStats`] — counters reported when a walk completes

pub mod error;
pub mod record;
pub mod sink;
pub mod walker;

pub use error::{Snapshot, WalkError, WalkResult};
pub use record::NodeChange;
pub use sink::{DiffSink, JsonSink, TextSink};
pub use walker::{DiffWalker, WalkStats};
