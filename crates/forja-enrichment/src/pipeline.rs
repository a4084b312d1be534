//! Two-pass enrichment pipeline
//!
//! Orchestrates one run over a notes folder: discover `*.md` files, read
//! and parse each one (pass 1, frequency aggregation), select terms, then
//! rewrite and persist each body (pass 2). Selection depends on global
//! corpus state, so pass 1 always completes before any rewrite.
//!
//! Every failure past discovery is per-file: malformed frontmatter,
//! non-UTF-8 content, and write errors are recorded in the [`RunReport`]
//! and the run continues. Files are replaced via a temp file in the same
//! directory plus an atomic rename, so a failed write never leaves a
//! half-written note.

use crate::config::EnrichConfig;
use crate::error::{EnrichError, EnrichResult};
use crate::frequency::FrequencyAggregator;
use crate::report::{FileFailure, RunReport};
use crate::rewriter::rewrite;
use crate::selector::select;
use forja_core::{CoreError, Document};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// One-shot enrichment engine for a notes folder
pub struct EnrichmentPipeline {
    config: EnrichConfig,
}

impl EnrichmentPipeline {
    /// Create a pipeline with an explicit configuration
    pub fn new(config: EnrichConfig) -> Self {
        Self { config }
    }

    /// Run both passes over the folder and report the outcome.
    ///
    /// Returns `Ok` whenever the folder itself is readable; an empty
    /// folder or an empty selection is a successful zero-change run.
    pub fn run(&self, notes_dir: &Path) -> EnrichResult<RunReport> {
        if !notes_dir.is_dir() {
            return Err(EnrichError::MissingFolder(notes_dir.to_path_buf()));
        }

        let paths = discover(notes_dir)?;
        info!(files = paths.len(), dir = %notes_dir.display(), "starting enrichment run");

        let mut failures = Vec::new();
        let mut documents = Vec::new();

        // Pass 1: read, parse, aggregate
        let mut aggregator = FrequencyAggregator::new(&self.config);
        for path in paths.iter() {
            match read_document(path) {
                Ok(doc) => {
                    aggregator.add_document(doc.body(), &doc.markers());
                    documents.push(doc);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping file");
                    failures.push(FileFailure {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let index = aggregator.into_index();
        let selected = select(&index, &self.config);
        info!(
            terms_considered = index.len(),
            terms_selected = selected.len(),
            "term selection complete"
        );

        // Pass 2: rewrite and persist
        let mut modified = 0;
        let mut unchanged = 0;
        for mut doc in documents {
            let new_body = rewrite(doc.body(), &selected, &doc.markers());
            if new_body == doc.body() {
                unchanged += 1;
                continue;
            }
            doc.set_body(new_body);
            match persist(&doc) {
                Ok(()) => {
                    debug!(path = %doc.path().display(), "rewrote document");
                    modified += 1;
                }
                Err(err) => {
                    warn!(path = %doc.path().display(), error = %err, "write failed");
                    failures.push(FileFailure {
                        path: doc.path().to_path_buf(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(RunReport {
            documents_found: paths.len(),
            modified,
            unchanged,
            failures,
            terms_considered: index.len(),
            selected,
            config: self.config.clone(),
        })
    }
}

/// Discover markdown files, sorted for deterministic reporting
fn discover(notes_dir: &Path) -> EnrichResult<Vec<PathBuf>> {
    // The folder itself is literal text: escape it so `[`, `?`, `*` in a
    // folder name are not read as pattern syntax
    let pattern = format!(
        "{}{}*.md",
        glob::Pattern::escape(&notes_dir.to_string_lossy()),
        std::path::MAIN_SEPARATOR
    );
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)?.filter_map(Result::ok).collect();
    paths.sort();
    Ok(paths)
}

/// Read one note, failing closed on encoding or frontmatter problems
fn read_document(path: &Path) -> Result<Document, CoreError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| CoreError::Encoding)?;
    Document::parse(path, &content)
}

/// Replace the file atomically: write a sibling temp file, then rename
fn persist(doc: &Document) -> Result<(), CoreError> {
    let dir = doc.path().parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(doc.render().as_bytes())?;
    tmp.persist(doc.path()).map_err(|e| CoreError::Io(e.error))?;
    Ok(())
}
