use std::collections::HashMap;
use std::fmt;

use crate::error::RegistryError;

/// Global node type id.
///
/// Issued by a [`NodeRegistry`] in first-seen order starting at 0. An id is
/// only meaningful relative to the registry that issued it; the raw 16-bit
/// ids found inside a serialized block are block-local and must be remapped
/// through a registry before they can be compared.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u16);

impl NodeId {
    /// Construct from a raw id value.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Bidirectional intern table mapping node type names to global ids.
///
/// One registry is shared by the decoding of both snapshots for the
/// lifetime of a comparison, so that an id means the same type name no
/// matter which snapshot produced it. The registry only grows; there is no
/// deletion.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    ids: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, assigning the next sequential id if the
    /// name has not been seen before.
    ///
    /// Fails with [`RegistryError::Full`] once 65536 distinct names have
    /// been interned.
    pub fn intern(&mut self, name: &str) -> Result<NodeId, RegistryError> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let next = self.names.len();
        if next > usize::from(u16::MAX) {
            return Err(RegistryError::Full);
        }
        let id = NodeId(next as u16);
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        Ok(id)
    }

    /// The name an id was interned under.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    /// Look up the id of an already-interned name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names have been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
