//! The map block decoder.
//!
//! Layout of a version-28 blob:
//!
//! ```text
//! [1 byte:  format version (28)]
//! [5 bytes: flags and content widths, not consumed here]
//! [zlib:    bulk node data — 4096 BE u16 param0, then param1/param2]
//! [zlib:    node metadata — drained and discarded]
//! [10 bytes: static object header + name-id mapping header]
//! [N entries: BE u16 local id, BE u16 name length, name bytes]
//! ```

use std::io::Read;

use flate2::read::ZlibDecoder;
use mtdiff_types::{NodeId, NodeRegistry, NODES_PER_BLOCK};

use crate::block::DecodedBlock;
use crate::error::{CodecError, CodecResult};

/// The only supported map format version.
pub const MAP_FORMAT_VERSION: u8 = 28;

/// Version byte plus the 5-byte header region skipped verbatim.
const HEADER_LEN: usize = 6;

/// Static object header (4 bytes incl. a skipped 4-byte field) plus
/// name-id mapping header, read as one raw region.
const TRAILER_HEADER_LEN: usize = 10;

/// Bytes of the bulk stream carrying param0: 4096 big-endian u16.
const PARAM0_LEN: usize = NODES_PER_BLOCK * 2;

/// Decode one serialized map block into its 4096 global node type ids.
///
/// Node type names found in the block's name-id mapping are interned
/// through `registry`, so blocks decoded against the same registry yield
/// directly comparable ids regardless of which snapshot they came from.
pub fn decode_block(blob: &[u8], registry: &mut NodeRegistry) -> CodecResult<DecodedBlock> {
    let version = *blob.first().ok_or(CodecError::UnexpectedEof {
        context: "format version",
    })?;
    if version != MAP_FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    if blob.len() < HEADER_LEN {
        return Err(CodecError::UnexpectedEof {
            context: "block header",
        });
    }
    let mut at = HEADER_LEN;

    // Bulk node data. Only param0 matters here; the stream may carry
    // further per-voxel channels (param1/param2) which inflate() drains.
    let bulk = inflate(blob, &mut at, "bulk node data")?;
    if bulk.len() < PARAM0_LEN {
        return Err(CodecError::UnexpectedEof {
            context: "bulk node data",
        });
    }
    let mut param0 = Box::new([0u16; NODES_PER_BLOCK]);
    for (slot, pair) in param0.iter_mut().zip(bulk[..PARAM0_LEN].chunks_exact(2)) {
        *slot = u16::from_be_bytes([pair[0], pair[1]]);
    }

    // Node metadata: no type information, but the stream must be read to
    // position the cursor at the trailer.
    inflate(blob, &mut at, "node metadata")?;

    let trailer = blob
        .get(at..at + TRAILER_HEADER_LEN)
        .ok_or(CodecError::UnexpectedEof {
            context: "static object header",
        })?;
    at += TRAILER_HEADER_LEN;

    if trailer[0] != 0 {
        return Err(CodecError::UnsupportedStaticObjectVersion(trailer[0]));
    }
    let static_count = u16::from_be_bytes([trailer[1], trailer[2]]);
    if static_count != 0 {
        return Err(CodecError::UnsupportedContent {
            count: static_count,
        });
    }
    // trailer[3..7] is the block timestamp, not interpreted here.
    if trailer[7] != 0 {
        return Err(CodecError::UnsupportedNameIdVersion(trailer[7]));
    }
    let entry_count = u16::from_be_bytes([trailer[8], trailer[9]]);

    // Per-block local id -> global id table. A slot the mapping never
    // assigns keeps the zero default, matching the upstream format's
    // assumption that every referenced local id is covered.
    let mut table = vec![NodeId::default(); usize::from(entry_count)];
    for _ in 0..entry_count {
        let head = blob.get(at..at + 4).ok_or(CodecError::UnexpectedEof {
            context: "name-id mapping entry",
        })?;
        at += 4;
        let local_id = u16::from_be_bytes([head[0], head[1]]);
        let name_len = usize::from(u16::from_be_bytes([head[2], head[3]]));
        let raw = blob.get(at..at + name_len).ok_or(CodecError::UnexpectedEof {
            context: "node type name",
        })?;
        at += name_len;

        // Names are not guaranteed to be UTF-8 by the format.
        let name = String::from_utf8_lossy(raw);
        let global = registry.intern(&name)?;
        let slot = table
            .get_mut(usize::from(local_id))
            .ok_or(CodecError::InvalidNameTable {
                local_id,
                table_len: usize::from(entry_count),
            })?;
        *slot = global;
    }

    // Remap every voxel from its block-local id to the global id.
    let mut ids = Box::new([NodeId::default(); NODES_PER_BLOCK]);
    for (slot, &local) in ids.iter_mut().zip(param0.iter()) {
        *slot = *table
            .get(usize::from(local))
            .ok_or(CodecError::InvalidNameTable {
                local_id: local,
                table_len: table.len(),
            })?;
    }

    Ok(DecodedBlock::new(ids))
}

/// Decompress the zlib stream starting at `*at`, advancing `*at` past the
/// compressed bytes the stream actually consumed. The stream is always
/// read to its end, so trailing decompressed content the caller ignores is
/// still drained.
fn inflate(blob: &[u8], at: &mut usize, context: &'static str) -> CodecResult<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(&blob[*at..]);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|source| CodecError::Zlib { context, source })?;
    *at += decoder.total_in() as usize;
    Ok(out)
}
