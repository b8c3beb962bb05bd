//! Core error type for subsync operations
//!
//! Provides the main `CoreError` enum shared by the parser, aligner and
//! synchronization engine. Parsing itself is permissive and never fails on
//! malformed cues; these errors surface from the strict helpers (timestamp
//! parsing, input decoding, block lookup) that callers may use directly.

use thiserror::Error;

/// Main error type for subsync core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Timestamp format errors (`HH:MM:SS,mmm`)
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Numeric value parsing errors
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),

    /// Input carries a byte order mark for an encoding other than UTF-8
    #[error("Unsupported text encoding: {0} (save the file as UTF-8)")]
    UnsupportedEncoding(&'static str),

    /// A block lookup referenced an index outside the current alignment
    #[error("Block not found: {index} (alignment has {len} blocks)")]
    BlockNotFound { index: usize, len: usize },
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
