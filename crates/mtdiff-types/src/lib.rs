//! Foundation types for mtdiff.
//!
//! This crate provides the coordinate and identity types shared by the
//! block codec, the store backends, and the diff walker. Every other
//! mtdiff crate depends on `mtdiff-types`.
//!
//! # Key Types
//!
//! - [`BlockPos`] — Position of one 16×16×16-node map block in block space
//! - [`NodePos`] — Absolute position of a single node (voxel) in node space
//! - [`BlockKey`] — The linear `i64` key a map database stores blocks under
//! - [`NodeId`] — Global node type id issued by the registry
//! - [`NodeRegistry`] — Intern table mapping node type names to ids

pub mod error;
pub mod position;
pub mod registry;

pub use error::RegistryError;
pub use position::{BlockKey, BlockPos, NodePos, NODES_PER_BLOCK};
pub use registry::{NodeId, NodeRegistry};
