//! The flood-fill traversal.
//!
//! Depth-first over the 6-connected block grid, driven by an explicit
//! work stack rather than recursion: connected components are unbounded,
//! and recursion depth would mirror component size. A position is visited
//! at most once; the visited set is the sole cycle guard (adjacent blocks
//! always share back-edges).
//!
//! Exploration order is fixed so output is reproducible: blocks are
//! processed in the preorder given by exploring the +x, -x, +y, -y, +z, -z
//! neighbors of each visited block, and within a block changes are emitted
//! in ascending voxel index.

use std::collections::HashSet;

use tracing::{debug, info};

use mtdiff_codec::decode_block;
use mtdiff_store::BlockStore;
use mtdiff_types::{BlockPos, NodeRegistry};

use crate::error::{Snapshot, WalkError, WalkResult};
use crate::record::NodeChange;
use crate::sink::DiffSink;

/// Counters reported when a walk completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Positions popped from the work stack and marked visited.
    pub blocks_visited: u64,
    /// Block pairs fetched from both snapshots and compared.
    pub blocks_compared: u64,
    /// Change records emitted.
    pub nodes_changed: u64,
}

/// Compares the connected region of the old snapshot against the new one.
///
/// Owns the shared node type registry and the visited set for one
/// comparison run; both grow monotonically and live for the whole run.
pub struct DiffWalker<'a> {
    old: &'a dyn BlockStore,
    new: &'a dyn BlockStore,
    registry: NodeRegistry,
    visited: HashSet<BlockPos>,
}

impl<'a> DiffWalker<'a> {
    /// Create a walker over an old and a new snapshot.
    pub fn new(old: &'a dyn BlockStore, new: &'a dyn BlockStore) -> Self {
        Self {
            old,
            new,
            registry: NodeRegistry::new(),
            visited: HashSet::new(),
        }
    }

    /// Flood-fill from `origin`, streaming every changed node to `sink`.
    ///
    /// The reachable set is the connected component of blocks populated in
    /// the old snapshot that contains `origin`. A block present in the old
    /// snapshot but missing from the new one aborts the run with
    /// [`WalkError::BlockVanished`].
    pub fn run(&mut self, origin: BlockPos, sink: &mut dyn DiffSink) -> WalkResult<WalkStats> {
        let mut stats = WalkStats::default();
        let mut stack = vec![origin];

        while let Some(pos) = stack.pop() {
            if !self.visited.insert(pos) {
                continue;
            }
            stats.blocks_visited += 1;

            // Frontier rule: the old snapshot bounds the search.
            let Some(old_blob) = self.fetch(pos, Snapshot::Old)? else {
                continue;
            };
            let new_blob = self
                .fetch(pos, Snapshot::New)?
                .ok_or(WalkError::BlockVanished(pos))?;

            let old_block = decode_block(&old_blob, &mut self.registry).map_err(|source| {
                WalkError::Decode {
                    pos,
                    snapshot: Snapshot::Old,
                    source,
                }
            })?;
            let new_block = decode_block(&new_blob, &mut self.registry).map_err(|source| {
                WalkError::Decode {
                    pos,
                    snapshot: Snapshot::New,
                    source,
                }
            })?;
            stats.blocks_compared += 1;

            let mut changed = 0u64;
            for (i, (&old_id, &new_id)) in
                old_block.ids().iter().zip(new_block.ids()).enumerate()
            {
                if old_id != new_id {
                    let change = NodeChange::new(
                        pos.node_at(i as u16),
                        self.registry.name(old_id),
                        self.registry.name(new_id),
                    );
                    sink.emit(&change)?;
                    changed += 1;
                }
            }
            stats.nodes_changed += changed;
            debug!(pos = %pos, changed, "compared block");

            // Reversed push so pop order explores +x, -x, +y, -y, +z, -z.
            for neighbor in pos.neighbors().into_iter().rev() {
                stack.push(neighbor);
            }
        }

        info!(
            visited = stats.blocks_visited,
            compared = stats.blocks_compared,
            changed = stats.nodes_changed,
            "walk complete"
        );
        Ok(stats)
    }

    /// The node type registry built up by this run.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    fn fetch(&self, pos: BlockPos, snapshot: Snapshot) -> WalkResult<Option<Vec<u8>>> {
        let store = match snapshot {
            Snapshot::Old => self.old,
            Snapshot::New => self.new,
        };
        store.get(pos.key()).map_err(|source| WalkError::Store {
            pos,
            snapshot,
            source,
        })
    }
}
