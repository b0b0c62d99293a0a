use mtdiff_types::NodePos;
use serde::Serialize;

/// A single voxel whose type differs between the two snapshots.
///
/// Records carry the type *names*, not ids: ids are only meaningful
/// relative to one registry, names travel between runs. Changes are
/// streamed to a sink and discarded immediately, never retained by the
/// walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NodeChange<'a> {
    /// Absolute node x coordinate.
    pub x: i16,
    /// Absolute node y coordinate.
    pub y: i16,
    /// Absolute node z coordinate.
    pub z: i16,
    /// Node type name in the old snapshot.
    pub old: &'a str,
    /// Node type name in the new snapshot.
    pub new: &'a str,
}

impl<'a> NodeChange<'a> {
    /// Build a change record for the node at `pos`.
    pub fn new(pos: NodePos, old: &'a str, new: &'a str) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            old,
            new,
        }
    }
}
