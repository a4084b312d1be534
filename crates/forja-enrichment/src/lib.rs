//! # Forja Enrichment
//!
//! The wikilink enrichment engine for the Forja note tools.
//!
//! Given a folder of markdown notes, the engine runs a two-pass batch:
//! 1. **Aggregate**: tokenize every note body (frontmatter excluded),
//!    building a corpus-wide term frequency index
//! 2. **Rewrite**: select the top terms and wrap each whole-word,
//!    case-insensitive occurrence as `[[term]]`, never touching
//!    frontmatter or existing markers, writing each file back atomically
//!
//! Both passes are synchronous and single-threaded; selection depends on
//! global corpus state, so aggregation always completes before any
//! rewrite. The index and selection are transient, rebuilt every run.
//!
//! Enrichment mutates the folder in place. There is no backup: run it on
//! a folder you can regenerate or have under version control.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use forja_enrichment::{EnrichConfig, EnrichmentPipeline, EnrichResult};
//! use std::path::Path;
//!
//! fn main() -> EnrichResult<()> {
//!     let pipeline = EnrichmentPipeline::new(EnrichConfig::default());
//!     let report = pipeline.run(Path::new("obsidian_ideas"))?;
//!     println!("{}", report.render_summary());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod rewriter;
pub mod selector;

pub use config::EnrichConfig;
pub use error::{EnrichError, EnrichResult};
pub use frequency::{FrequencyAggregator, FrequencyIndex, TermStats};
pub use pipeline::EnrichmentPipeline;
pub use report::{FileFailure, RunReport};
pub use rewriter::rewrite;
pub use selector::{select, SelectedTerm, SelectedTerms};
