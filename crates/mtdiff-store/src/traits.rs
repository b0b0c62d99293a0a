use mtdiff_types::BlockKey;

use crate::error::StoreResult;

/// Read-only lookup from a block key to a serialized block blob.
///
/// Implementations must satisfy these invariants:
/// - The store is keyed by the linear form computed by
///   [`BlockPos::key`](mtdiff_types::BlockPos::key); there is no other
///   key derivation.
/// - `Ok(None)` means "no block at this key" and is a normal outcome.
/// - Any other lookup failure is an error, propagated and never retried.
/// - Lookups never mutate the store.
pub trait BlockStore {
    /// Fetch the serialized block stored under `key`.
    fn get(&self, key: BlockKey) -> StoreResult<Option<Vec<u8>>>;
}
