//! Core error types

use std::io;
use thiserror::Error;

/// Error type for document handling
#[derive(Debug, Error)]
pub enum CoreError {
    /// IO error reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Frontmatter block opened but never closed
    #[error("unterminated frontmatter block")]
    UnterminatedFrontmatter,

    /// File content is not valid UTF-8
    #[error("invalid UTF-8 encoding in file")]
    Encoding,
}

/// Specialized Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check if this error is recoverable (skip the file, keep the run)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnterminatedFrontmatter | Self::Encoding)
    }
}
