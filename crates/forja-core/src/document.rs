//! Markdown document model
//!
//! A [`Document`] owns one note's text split at the frontmatter boundary.
//! The frontmatter (fences included) is stored verbatim so that
//! `render()` reassembles the original file byte-for-byte when the body is
//! unchanged.

use crate::error::CoreResult;
use crate::frontmatter;
use crate::wikilinks::MarkerRanges;
use std::path::{Path, PathBuf};

/// One markdown note, split into opaque frontmatter and mutable body
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    frontmatter: Option<String>,
    body: String,
}

impl Document {
    /// Parse a note from its raw content.
    ///
    /// Fails with [`crate::CoreError::UnterminatedFrontmatter`] when the
    /// file opens a `---` fence that never closes.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> CoreResult<Self> {
        let (fm, body) = frontmatter::split(content)?;
        Ok(Self {
            path: path.into(),
            frontmatter: fm.map(str::to_string),
            body: body.to_string(),
        })
    }

    /// Path this document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw frontmatter block, fences included
    pub fn frontmatter(&self) -> Option<&str> {
        self.frontmatter.as_deref()
    }

    /// Body text following the frontmatter
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the body, keeping the frontmatter untouched
    pub fn set_body(&mut self, body: String) {
        self.body = body;
    }

    /// Scan the body for existing wikilink markers
    pub fn markers(&self) -> MarkerRanges {
        MarkerRanges::scan(&self.body)
    }

    /// Reassemble the full file content
    pub fn render(&self) -> String {
        match &self.frontmatter {
            Some(fm) => format!("{fm}{}", self.body),
            None => self.body.clone(),
        }
    }
}
