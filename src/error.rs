//! Error types for files-changed

use thiserror::Error;

/// Result type alias for files-changed operations
pub type Result<T> = std::result::Result<T, FilesChangedError>;

/// Error types for files-changed operations
#[derive(Error, Debug)]
pub enum FilesChangedError {
    /// The configured glob pattern list is empty
    #[error("No file paths provided. Please set the file-paths input.")]
    NoFilePaths,

    /// A configured glob pattern does not compile
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Git operation failed
    #[error("Git error: {0}")]
    GitError(String),

    /// The event payload file could not be read or parsed
    #[error("Invalid event payload: {0}")]
    InvalidEvent(String),

    /// I/O error while logging or publishing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
