use std::collections::HashMap;

use mtdiff_types::{BlockKey, BlockPos};

use crate::error::StoreResult;
use crate::traits::BlockStore;

/// In-memory, `HashMap`-based block store.
///
/// Intended for tests and embedding. Blocks are inserted up front and the
/// store is read-only afterwards, like every other backend.
#[derive(Debug, Default)]
pub struct InMemoryBlockStore {
    blocks: HashMap<BlockKey, Vec<u8>>,
}

impl InMemoryBlockStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a serialized block at a block position.
    pub fn insert(&mut self, pos: BlockPos, blob: Vec<u8>) {
        self.blocks.insert(pos.key(), blob);
    }

    /// Number of blocks stored.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the store holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockStore for InMemoryBlockStore {
    fn get(&self, key: BlockKey) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.blocks.get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut store = InMemoryBlockStore::new();
        let pos = BlockPos::new(0, 1, 0);
        store.insert(pos, vec![1, 2, 3]);

        assert_eq!(store.get(pos.key()).unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn absent_key_is_none() {
        let store = InMemoryBlockStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(7).unwrap(), None);
    }

    #[test]
    fn keyed_by_linear_form() {
        let mut store = InMemoryBlockStore::new();
        store.insert(BlockPos::new(0, 1, 0), vec![9]);
        // The same key reached through the raw linear form resolves.
        assert_eq!(store.get(4096).unwrap(), Some(vec![9]));
    }
}
