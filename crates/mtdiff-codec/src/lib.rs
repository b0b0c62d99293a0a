//! Decoder for serialized Minetest map blocks.
//!
//! A map block blob is a versioned, partially zlib-compressed binary
//! format: a one-byte version tag, a fixed header, two back-to-back zlib
//! streams (bulk node data and node metadata), and an uncompressed trailer
//! carrying the static object table and the per-block name-id mapping.
//! Only format version 28 is supported.
//!
//! Decoding produces a [`DecodedBlock`]: the block's 4096 node type
//! references remapped from block-local ids to global ids through a shared
//! [`NodeRegistry`](mtdiff_types::NodeRegistry), so that blocks decoded
//! from different snapshots are directly comparable.
//!
//! Every structural violation is a typed, fatal [`CodecError`]; there is
//! no partial or recoverable decode.

pub mod block;
pub mod decode;
pub mod error;

pub use block::DecodedBlock;
pub use decode::{decode_block, MAP_FORMAT_VERSION};
pub use error::{CodecError, CodecResult};
