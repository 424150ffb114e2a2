//! Error types for moodwrap
//!
//! Library code returns [`Error`]; the binary wraps it in `anyhow` for context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodwrap library
#[derive(Error, Debug)]
pub enum Error {
    /// No tracks reached a stage that needs at least one
    #[error("No input: the track list is empty")]
    EmptyInput,

    /// A track record is missing something the pipeline relies on
    #[error("Malformed track at index {index}: {reason}")]
    MalformedTrack { index: usize, reason: String },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors, with the offending path
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload or config JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using the moodwrap Error
pub type Result<T> = std::result::Result<T, Error>;
