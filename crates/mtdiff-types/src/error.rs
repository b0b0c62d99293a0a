use thiserror::Error;

/// Errors produced by the node type registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The 16-bit global id space is exhausted. Fatal: a comparison run
    /// that sees more than 65536 distinct node type names cannot continue.
    #[error("too many node types: the 16-bit id space is exhausted")]
    Full,
}
