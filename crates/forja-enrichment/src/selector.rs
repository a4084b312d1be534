//! Term selection
//!
//! Turns the frequency index into the ordered set of link-worthy terms:
//! total count at or above the configured floor, at least one occurrence
//! outside existing markers, sorted by descending count with ties broken
//! by ascending lexicographic order of the normalized term, truncated to
//! the configured cap. The ordering is deterministic because it is visible
//! in the run summary.

use crate::config::EnrichConfig;
use crate::frequency::FrequencyIndex;
use tracing::debug;

/// One selected term with its corpus-wide count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTerm {
    /// Normalized (lowercase) term
    pub term: String,
    /// Raw occurrence count across the corpus
    pub count: u64,
}

/// Ordered set of terms chosen for linking
#[derive(Debug, Clone, Default)]
pub struct SelectedTerms {
    terms: Vec<SelectedTerm>,
}

impl SelectedTerms {
    /// Iterate in selection order (highest count first)
    pub fn iter(&self) -> impl Iterator<Item = &SelectedTerm> {
        self.terms.iter()
    }

    /// Iterate over the normalized term strings in selection order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.term.as_str())
    }

    /// Number of selected terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when nothing qualified
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Human-readable term table for the run summary
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        for (i, t) in self.terms.iter().enumerate() {
            out.push_str(&format!("{:3}. {:24} {:>5}\n", i + 1, t.term, t.count));
        }
        out
    }
}

/// Select the link-worthy terms for this run
pub fn select(index: &FrequencyIndex, config: &EnrichConfig) -> SelectedTerms {
    let mut terms: Vec<SelectedTerm> = index
        .iter()
        .filter(|(_, stats)| stats.total >= config.min_frequency && stats.unlinked > 0)
        .map(|(term, stats)| SelectedTerm {
            term: term.to_string(),
            count: stats.total,
        })
        .collect();

    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    terms.truncate(config.max_terms);

    debug!(
        candidates = index.len(),
        selected = terms.len(),
        "term selection complete"
    );
    SelectedTerms { terms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyAggregator;
    use forja_core::MarkerRanges;

    fn index_of(bodies: &[&str], config: &EnrichConfig) -> FrequencyIndex {
        let mut agg = FrequencyAggregator::new(config);
        for body in bodies {
            agg.add_document(body, &MarkerRanges::scan(body));
        }
        agg.into_index()
    }

    #[test]
    fn respects_floor_and_cap() {
        let config = EnrichConfig {
            max_terms: 2,
            ..EnrichConfig::default()
        };
        let index = index_of(
            &["redes redes redes neuronales neuronales overfitting datos datos"],
            &config,
        );
        let selected = select(&index, &config);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|t| t.count >= config.min_frequency));
        // "overfitting" appears once, below the floor
        assert!(!selected.words().any(|w| w == "overfitting"));
    }

    #[test]
    fn orders_by_count_then_lexicographically() {
        let config = EnrichConfig::default();
        let index = index_of(&["zeta zeta alfa alfa datos datos datos"], &config);
        let selected = select(&index, &config);
        let words: Vec<_> = selected.words().collect();
        assert_eq!(words, vec!["datos", "alfa", "zeta"]);
    }

    #[test]
    fn fully_linked_terms_are_not_candidates() {
        let config = EnrichConfig::default();
        let index = index_of(&["[[modelos]] y [[modelos]] otra vez"], &config);
        let selected = select(&index, &config);
        assert!(!selected.words().any(|w| w == "modelos"));
    }

    #[test]
    fn empty_index_selects_nothing() {
        let config = EnrichConfig::default();
        let selected = select(&FrequencyIndex::default(), &config);
        assert!(selected.is_empty());
        assert_eq!(selected.render_table(), "");
    }

    #[test]
    fn table_lists_terms_in_order() {
        let config = EnrichConfig::default();
        let index = index_of(&["datos datos datos modelos modelos"], &config);
        let table = select(&index, &config).render_table();
        let datos_pos = table.find("datos").unwrap();
        let modelos_pos = table.find("modelos").unwrap();
        assert!(datos_pos < modelos_pos);
        assert!(table.contains('3'));
    }
}
