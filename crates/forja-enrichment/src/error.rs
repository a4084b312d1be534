//! Enrichment error types

use std::path::PathBuf;
use thiserror::Error;

/// Error type for the enrichment engine.
///
/// Document-level problems never surface here: the pipeline records them
/// per file in the run report and keeps going.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Notes folder does not exist or is not a directory
    #[error("notes folder not found: {0}")]
    MissingFolder(PathBuf),

    /// File discovery pattern failed to compile
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Specialized Result type for enrichment operations
pub type EnrichResult<T> = Result<T, EnrichError>;
