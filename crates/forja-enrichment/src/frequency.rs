//! Corpus frequency aggregation
//!
//! Pass 1 of the engine. Every note body is tokenized once and folded into
//! a [`FrequencyIndex`]. Counting policy (see DESIGN.md): the total count
//! includes occurrences inside existing `[[...]]` markers, which keeps
//! counts stable when a run re-reads its own output; a separate unlinked
//! count tracks occurrences outside every marker, and only terms with at
//! least one unlinked occurrence can become selection candidates.
//!
//! Totals are plain sums, so the final index is independent of document
//! order. The first-seen rank is diagnostic only and plays no part in
//! selection.

use crate::config::EnrichConfig;
use forja_core::{tokenize, MarkerRanges, Stopwords, Token};
use std::collections::HashMap;
use tracing::debug;

/// Per-term counters
#[derive(Debug, Clone, Copy, Default)]
pub struct TermStats {
    /// Raw occurrences across all bodies, markers included
    pub total: u64,
    /// Occurrences outside every existing marker
    pub unlinked: u64,
    /// Rank at which the term first entered the index
    pub first_seen: u64,
}

/// Immutable corpus-wide term frequency index
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    terms: HashMap<String, TermStats>,
    documents: usize,
}

impl FrequencyIndex {
    /// Stats for a normalized term
    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.terms.get(term)
    }

    /// Number of distinct terms considered
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no terms were counted
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents aggregated
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Iterate over (term, stats) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStats)> {
        self.terms.iter().map(|(t, s)| (t.as_str(), s))
    }
}

/// Builds a [`FrequencyIndex`] one document at a time
pub struct FrequencyAggregator {
    index: FrequencyIndex,
    stopwords: Stopwords,
    min_word_length: usize,
    next_rank: u64,
}

impl FrequencyAggregator {
    /// Create an aggregator for one run
    pub fn new(config: &EnrichConfig) -> Self {
        Self {
            index: FrequencyIndex::default(),
            stopwords: config.stopwords(),
            min_word_length: config.min_word_length,
            next_rank: 0,
        }
    }

    /// Fold one note body into the index. The caller passes the marker
    /// ranges so occurrences inside existing wikilinks are counted as
    /// linked.
    pub fn add_document(&mut self, body: &str, markers: &MarkerRanges) {
        let mut counted = 0u64;
        for token in tokenize(body) {
            if !self.accepts(&token) {
                continue;
            }
            let term = token.normalized();
            let rank = self.next_rank;
            let stats = self.index.terms.entry(term).or_insert_with(|| {
                TermStats {
                    first_seen: rank,
                    ..TermStats::default()
                }
            });
            if stats.total == 0 {
                self.next_rank += 1;
            }
            stats.total += 1;
            if !markers.overlaps(&token.range) {
                stats.unlinked += 1;
            }
            counted += 1;
        }
        self.index.documents += 1;
        debug!(tokens = counted, "aggregated document");
    }

    /// Finish pass 1 and hand the immutable index to the selector
    pub fn into_index(self) -> FrequencyIndex {
        self.index
    }

    fn accepts(&self, token: &Token<'_>) -> bool {
        if !token.is_word() {
            return false;
        }
        let term = token.normalized();
        term.chars().count() >= self.min_word_length && !self.stopwords.contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(bodies: &[&str]) -> FrequencyIndex {
        let mut agg = FrequencyAggregator::new(&EnrichConfig::default());
        for body in bodies {
            let markers = MarkerRanges::scan(body);
            agg.add_document(body, &markers);
        }
        agg.into_index()
    }

    #[test]
    fn counts_raw_occurrences_across_documents() {
        let index = aggregate(&[
            "modelos robustos y modelos simples",
            "comparar modelos",
            "modelos",
        ]);
        assert_eq!(index.get("modelos").unwrap().total, 4);
        assert_eq!(index.documents(), 3);
    }

    #[test]
    fn short_terms_and_stopwords_never_enter_the_index() {
        let index = aggregate(&["ver los modelos para entrenar"]);
        assert!(index.get("ver").is_none()); // below min length
        assert!(index.get("para").is_none()); // stopword
        assert!(index.get("modelos").is_some());
        assert!(index.get("entrenar").is_some());
    }

    #[test]
    fn marker_interior_occurrences_count_as_linked() {
        let index = aggregate(&["[[modelos]] y modelos sueltos"]);
        let stats = index.get("modelos").unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.unlinked, 1);
    }

    #[test]
    fn fully_linked_term_has_zero_unlinked() {
        let index = aggregate(&["ver [[modelos]] aqui", "otra vez [[modelos]]"]);
        let stats = index.get("modelos").unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.unlinked, 0);
    }

    #[test]
    fn totals_are_order_independent() {
        let a = aggregate(&["modelos primero", "después modelos modelos"]);
        let b = aggregate(&["después modelos modelos", "modelos primero"]);
        assert_eq!(a.get("modelos").unwrap().total, b.get("modelos").unwrap().total);
        assert_eq!(
            a.get("modelos").unwrap().unlinked,
            b.get("modelos").unwrap().unlinked
        );
    }

    #[test]
    fn digit_tokens_are_skipped() {
        let index = aggregate(&["versión 2024 del experimento 12345"]);
        assert!(index.get("2024").is_none());
        assert!(index.get("12345").is_none());
        assert!(index.get("experimento").is_some());
    }
}
