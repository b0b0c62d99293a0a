//! Map block storage backends for mtdiff.
//!
//! A store maps a [`BlockKey`](mtdiff_types::BlockKey) to the serialized
//! block blob saved under it, or to "absent". Stores are strictly
//! read-only: nothing in a comparison run ever mutates a snapshot.
//!
//! # Backends
//!
//! All backends implement the [`BlockStore`] trait:
//!
//! - [`MapDatabase`] — a Minetest `map.sqlite` database, opened read-only
//! - [`InMemoryBlockStore`] — `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. "No block at this key" is `Ok(None)`, a normal outcome.
//! 2. Every other lookup failure is an error, propagated and never retried.
//! 3. The store never interprets blob contents.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBlockStore;
pub use sqlite::MapDatabase;
pub use traits::BlockStore;
