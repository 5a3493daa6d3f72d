//! Error types for imagery atlas merging

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to load document from {}: {reason}", path.display())]
    LoadError { path: PathBuf, reason: String },

    #[error("Invalid atlas document {source_name}: {reason}")]
    InvalidDocument { source_name: String, reason: String },

    #[error("Failed to write merged document to {}: {reason}", path.display())]
    WriteError { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
