//! Error taxonomy for the record store.

use crate::ident::format_id;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the store, codec and allocator.
///
/// `NotFound` is recoverable (the shell prompts again); the rest are fatal
/// for the session. Nothing here is ever swallowed internally; every error
/// propagates out so the caller decides whether to retry, abort or prompt.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record carries the requested identifier.
    #[error("no record with identifier {}", format_id(*.0))]
    NotFound(u32),

    /// The backing directory or file cannot be created, read or written.
    #[error("storage unavailable at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file violates the codec grammar. Decoding aborts rather
    /// than silently dropping or truncating records.
    #[error("malformed record file (record {record}): {reason}")]
    Decode { record: usize, reason: String },

    /// The allocator cannot issue a value within the 32-bit bound.
    #[error("identifier space exhausted (32-bit namespace is full)")]
    IdSpaceExhausted,
}

impl StoreError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Storage { path: path.into(), source }
    }

    pub(crate) fn decode(record: usize, reason: impl Into<String>) -> Self {
        StoreError::Decode { record, reason: reason.into() }
    }
}
