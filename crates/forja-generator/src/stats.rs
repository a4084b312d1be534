//! Generation statistics
//!
//! Counters accumulated while writing notes, rendered as the operator
//! summary at the end of a `generate` run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// Summary of one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationStats {
    /// Notes written to disk
    pub notes_written: usize,
    /// Notes carrying at least one tag
    pub notes_with_tags: usize,
    /// Notes carrying at least one explicit connection
    pub notes_with_links: usize,
    /// Total explicit connections across all notes
    pub total_links: usize,
    unique_tags: BTreeSet<String>,
    by_estado: BTreeMap<String, usize>,
    by_tipo: BTreeMap<String, usize>,
}

impl GenerationStats {
    /// Record one generated note
    pub fn record(
        &mut self,
        tags: &[String],
        links: &[String],
        estado: Option<&str>,
        tipo: Option<&str>,
    ) {
        self.notes_written += 1;
        if !tags.is_empty() {
            self.notes_with_tags += 1;
            self.unique_tags.extend(tags.iter().cloned());
        }
        if !links.is_empty() {
            self.notes_with_links += 1;
            self.total_links += links.len();
        }
        if let Some(estado) = estado {
            *self.by_estado.entry(estado.to_string()).or_default() += 1;
        }
        if let Some(tipo) = tipo {
            *self.by_tipo.entry(tipo.to_string()).or_default() += 1;
        }
    }

    /// Number of distinct tags seen
    pub fn unique_tags(&self) -> usize {
        self.unique_tags.len()
    }

    /// Plain-text summary for operator output
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Notes written:         {}", self.notes_written);
        let _ = writeln!(out, "Notes with tags:       {}", self.notes_with_tags);
        let _ = writeln!(out, "Notes with links:      {}", self.notes_with_links);
        let _ = writeln!(out, "Unique tags:           {}", self.unique_tags());
        let _ = writeln!(out, "Explicit connections:  {}", self.total_links);

        if !self.by_estado.is_empty() {
            let _ = writeln!(out, "\nBy estado:");
            for (estado, count) in &self.by_estado {
                let _ = writeln!(out, "  {estado}: {count}");
            }
        }
        if !self.by_tipo.is_empty() {
            let _ = writeln!(out, "\nBy tipo:");
            for (tipo, count) in &self.by_tipo {
                let _ = writeln!(out, "  {tipo}: {count}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_across_notes() {
        let mut stats = GenerationStats::default();
        stats.record(
            &["ml".to_string(), "datos".to_string()],
            &["[[Otra nota]]".to_string()],
            Some("Activa"),
            None,
        );
        stats.record(&["ml".to_string()], &[], Some("Activa"), Some("Insight"));

        assert_eq!(stats.notes_written, 2);
        assert_eq!(stats.notes_with_tags, 2);
        assert_eq!(stats.notes_with_links, 1);
        assert_eq!(stats.total_links, 1);
        assert_eq!(stats.unique_tags(), 2);

        let summary = stats.render_summary();
        assert!(summary.contains("Activa: 2"));
        assert!(summary.contains("Insight: 1"));
    }
}
