//! Error types.
//!
//! Resolution and normalization never fail; only loading a directory or
//! decoding a whole transaction document does.

use thiserror::Error;

/// Errors from building or loading a chain / asset directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Duplicate {kind} id '{id}' in directory")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Empty id at position {index} in {kind} directory")]
    EmptyId { kind: &'static str, index: usize },

    #[error("Invalid directory JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from decoding a transaction result document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid transaction JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unexpected transaction shape: {reason}")]
    UnexpectedShape { reason: String },
}
