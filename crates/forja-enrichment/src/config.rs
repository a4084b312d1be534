//! Engine configuration
//!
//! An explicit [`EnrichConfig`] is passed into the pipeline at
//! construction; the engine holds no process-wide state.

use forja_core::{Language, Stopwords};

/// Default minimum normalized term length
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
/// Default occurrence floor for selection
pub const DEFAULT_MIN_FREQUENCY: u64 = 2;
/// Default cap on the selected term set
pub const DEFAULT_MAX_TERMS: usize = 20;

/// Tunables for one enrichment run
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Terms shorter than this (in chars) are never counted or selected
    pub min_word_length: usize,
    /// Terms with fewer total occurrences than this are never selected
    pub min_frequency: u64,
    /// Upper bound on the selected term set
    pub max_terms: usize,
    /// Bundled stopword languages to load
    pub languages: Vec<Language>,
    /// Additional stopwords merged into the bundled sets
    pub extra_stopwords: Vec<String>,
}

impl EnrichConfig {
    /// Build the merged stopword set for this run
    pub fn stopwords(&self) -> Stopwords {
        Stopwords::bundled(&self.languages).with_extra(&self.extra_stopwords)
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_terms: DEFAULT_MAX_TERMS,
            languages: vec![Language::Spanish, Language::English],
            extra_stopwords: Vec::new(),
        }
    }
}
