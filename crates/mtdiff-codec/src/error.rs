use mtdiff_types::RegistryError;
use thiserror::Error;

/// Errors from decoding a serialized map block.
///
/// All of these are fatal to the comparison run: the design assumes
/// well-formed, trusted map databases, so any structural violation is
/// treated as data corruption worth aborting on rather than masking.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Byte 0 of the blob is not the supported map format version.
    #[error("unsupported map format version {0}")]
    UnsupportedVersion(u8),

    /// The static object table declares a version other than 0.
    #[error("unsupported static object version {0}")]
    UnsupportedStaticObjectVersion(u8),

    /// The name-id mapping declares a version other than 0.
    #[error("unsupported name-id mapping version {0}")]
    UnsupportedNameIdVersion(u8),

    /// The block embeds static objects, which this decoder does not
    /// support.
    #[error("unsupported content: {count} static objects")]
    UnsupportedContent { count: u16 },

    /// The blob ended before the named structure was fully read.
    #[error("unexpected end of data in {context}")]
    UnexpectedEof { context: &'static str },

    /// A zlib stream failed to decompress.
    #[error("zlib stream ({context}): {source}")]
    Zlib {
        context: &'static str,
        source: std::io::Error,
    },

    /// A block-local node id falls outside the name-id mapping table.
    #[error("name-id mapping: local id {local_id} out of range for table of {table_len} entries")]
    InvalidNameTable { local_id: u16, table_len: usize },

    /// The shared node type registry ran out of ids.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
