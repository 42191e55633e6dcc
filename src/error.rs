//! Error types for stashkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StashError
pub type Result<T> = std::result::Result<T, StashError>;

/// Unified error type for stashkv operations
#[derive(Debug, Error)]
pub enum StashError {
    // -------------------------------------------------------------------------
    // Key Construction Errors
    // -------------------------------------------------------------------------
    #[error("either both or neither of to_storage and from_storage must be supplied")]
    InconsistentConverter,

    // -------------------------------------------------------------------------
    // Conversion Errors
    // -------------------------------------------------------------------------
    #[error("structured decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no numeric prefix in stored text: {text:?}")]
    ParseNumber { text: String },

    #[error("malformed stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    // -------------------------------------------------------------------------
    // Substrate Errors
    // -------------------------------------------------------------------------
    #[error("storage quota exceeded: {used} bytes used, {requested} requested, quota {quota}")]
    QuotaExceeded {
        used: usize,
        requested: usize,
        quota: usize,
    },

    #[error("substrate error: {0}")]
    Substrate(String),
}
