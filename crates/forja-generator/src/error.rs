//! Generator error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for note generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Export file does not exist
    #[error("CSV export not found: {0}")]
    MissingExport(PathBuf),

    /// IO error reading the export or writing a note
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Frontmatter serialization failed
    #[error("frontmatter serialization error: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}

/// Specialized Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;
