//! Run reporting
//!
//! The [`RunReport`] is the operator-facing artifact of an enrichment run:
//! how many documents were seen, changed, or skipped, which files failed
//! and why, and the selected term table. Successes and failures are
//! reported distinctly; the report is not meant to be machine-parsed.

use crate::config::EnrichConfig;
use crate::selector::SelectedTerms;
use std::fmt::Write as _;
use std::path::PathBuf;

/// One skipped or failed file with the reason
#[derive(Debug, Clone)]
pub struct FileFailure {
    /// Path of the affected file
    pub path: PathBuf,
    /// Human-readable reason
    pub reason: String,
}

/// Summary of one enrichment run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Markdown files discovered in the notes folder
    pub documents_found: usize,
    /// Documents that were rewritten
    pub modified: usize,
    /// Documents scanned but left unchanged
    pub unchanged: usize,
    /// Per-file failures (skipped, run continued)
    pub failures: Vec<FileFailure>,
    /// Distinct terms considered by the selector
    pub terms_considered: usize,
    /// The selected term set, in selection order
    pub selected: SelectedTerms,
    /// Thresholds applied during this run
    pub config: EnrichConfig,
}

impl RunReport {
    /// Documents that completed both passes
    pub fn processed(&self) -> usize {
        self.modified + self.unchanged
    }

    /// True when every discovered file completed both passes
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Plain-text summary for operator output and logs
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Documents found:     {}", self.documents_found);
        let _ = writeln!(out, "Documents modified:  {}", self.modified);
        let _ = writeln!(out, "Documents unchanged: {}", self.unchanged);
        let _ = writeln!(out, "Documents skipped:   {}", self.failures.len());
        let _ = writeln!(out, "Terms considered:    {}", self.terms_considered);
        let _ = writeln!(out, "Terms selected:      {}", self.selected.len());

        if !self.selected.is_empty() {
            let _ = writeln!(out, "\nSelected terms:");
            out.push_str(&self.selected.render_table());
        } else {
            let _ = writeln!(out, "\nNo terms passed the selection thresholds; nothing was linked.");
        }

        if !self.failures.is_empty() {
            let _ = writeln!(out, "\nSkipped files:");
            for failure in &self.failures {
                let _ = writeln!(out, "  {} ({})", failure.path.display(), failure.reason);
            }
        }

        let _ = writeln!(
            out,
            "\nThresholds: min length {}, min frequency {}, top {}",
            self.config.min_word_length, self.config.min_frequency, self.config.max_terms
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_renders_zero_terms_message() {
        let report = RunReport {
            documents_found: 0,
            modified: 0,
            unchanged: 0,
            failures: vec![],
            terms_considered: 0,
            selected: SelectedTerms::default(),
            config: EnrichConfig::default(),
        };
        assert!(report.is_clean());
        assert_eq!(report.processed(), 0);
        assert!(report.render_summary().contains("nothing was linked"));
    }

    #[test]
    fn failures_are_listed_with_paths() {
        let report = RunReport {
            documents_found: 2,
            modified: 1,
            unchanged: 0,
            failures: vec![FileFailure {
                path: PathBuf::from("bad.md"),
                reason: "unterminated frontmatter block".to_string(),
            }],
            terms_considered: 5,
            selected: SelectedTerms::default(),
            config: EnrichConfig::default(),
        };
        let summary = report.render_summary();
        assert!(summary.contains("bad.md"));
        assert!(summary.contains("unterminated"));
        assert!(!report.is_clean());
    }
}
