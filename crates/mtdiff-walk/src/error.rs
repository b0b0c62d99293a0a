use std::fmt;

use mtdiff_codec::CodecError;
use mtdiff_store::StoreError;
use mtdiff_types::BlockPos;
use thiserror::Error;

/// Which snapshot an operation was acting on when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Snapshot {
    Old,
    New,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Snapshot::Old => "old",
            Snapshot::New => "new",
        })
    }
}

/// Errors that abort a comparison walk.
///
/// There is no partial-result mode: the first error stops the run and no
/// further records are emitted.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A block present in the old snapshot has no counterpart in the new
    /// one. Deletions are not a supported diff outcome.
    #[error("block disappeared from the new snapshot: {0}")]
    BlockVanished(BlockPos),

    /// A store lookup failed with something other than "absent".
    #[error("lookup in the {snapshot} snapshot failed at {pos}: {source}")]
    Store {
        pos: BlockPos,
        snapshot: Snapshot,
        source: StoreError,
    },

    /// A fetched block failed to decode.
    #[error("failed to decode {snapshot} block at {pos}: {source}")]
    Decode {
        pos: BlockPos,
        snapshot: Snapshot,
        source: CodecError,
    },

    /// The output sink rejected a record.
    #[error("failed to write diff record: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result alias for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
