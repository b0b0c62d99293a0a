use mtdiff_types::{NodeId, NODES_PER_BLOCK};

/// The node type content of one decoded map block.
///
/// Holds 4096 global node type ids in voxel-index order (see
/// [`BlockPos::node_at`](mtdiff_types::BlockPos::node_at) for the index
/// convention). Produced fresh by each decode and owned by the caller;
/// decoded blocks are never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBlock {
    ids: Box<[NodeId; NODES_PER_BLOCK]>,
}

impl DecodedBlock {
    pub(crate) fn new(ids: Box<[NodeId; NODES_PER_BLOCK]>) -> Self {
        Self { ids }
    }

    /// The global node type ids, one per voxel, in voxel-index order.
    pub fn ids(&self) -> &[NodeId; NODES_PER_BLOCK] {
        &self.ids
    }

    /// The global id of the node at `index` (0..4095).
    pub fn node(&self, index: usize) -> NodeId {
        self.ids[index]
    }
}
