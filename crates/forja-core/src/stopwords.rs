//! Stopword sets
//!
//! Bundled function-word lists for the two supported input languages, plus
//! a handful of export-domain words ("idea", "ideas") that carry no linking
//! value. Config can extend the merged set with extra entries.

use std::collections::HashSet;

/// Supported stopword languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    fn bundled(self) -> &'static [&'static str] {
        match self {
            Language::Spanish => SPANISH,
            Language::English => ENGLISH,
        }
    }
}

/// Merged stopword set checked during frequency aggregation
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Build the set from the bundled lists for the given languages
    pub fn bundled(languages: &[Language]) -> Self {
        let mut words: HashSet<String> = languages
            .iter()
            .flat_map(|l| l.bundled().iter().map(|w| w.to_string()))
            .collect();
        words.extend(DOMAIN.iter().map(|w| w.to_string()));
        Self { words }
    }

    /// Extend the set with additional lowercase words
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check a normalized (lowercase) term against the set
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    /// Number of words in the merged set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::bundled(&[Language::Spanish, Language::English])
    }
}

// Export-specific noise, excluded regardless of language
const DOMAIN: &[&str] = &["idea", "ideas"];

const SPANISH: &[&str] = &[
    "con", "para", "por", "que", "del", "los", "las", "una", "uno", "este", "esta", "estos",
    "estas", "como", "más", "muy", "también", "pero", "sin", "sobre", "entre", "hasta", "desde",
    "hacia", "durante", "mediante", "puede", "pueden", "ser", "son", "tiene", "tienen", "hacer",
    "hace", "hacen", "decir", "dice", "ver", "vez", "año", "años", "día", "días", "caso", "casos",
    "parte", "partes", "forma", "formas", "manera", "maneras", "tipo", "tipos", "todo", "todos",
    "todas", "cada", "cual", "cuales", "cuando", "donde", "cualquier", "algunos", "algunas",
    "otro", "otros", "otra", "otras", "mismo", "misma", "mismos", "mismas", "solo", "sola",
    "solas", "tanto", "tanta", "tantos", "tantas", "menos", "mayor", "mayores", "menor",
    "menores", "mejor", "mejores", "peor", "peores", "nuevo", "nueva", "nuevos", "nuevas", "gran",
    "grande", "grandes", "pequeño", "pequeña", "pequeños", "pequeñas",
];

const ENGLISH: &[&str] = &[
    "with", "that", "this", "the", "a", "an", "and", "or", "but", "for", "from", "have", "has",
    "had", "was", "were", "been", "being", "are", "is", "it", "its", "they", "them", "their",
    "there", "these", "those", "what", "which", "who", "when", "where", "why", "how", "can",
    "could", "should", "would", "will", "shall", "may", "might", "must", "about", "into", "onto",
    "upon", "within", "without", "through", "during", "before", "after", "above", "below",
    "under", "over", "between", "among", "while", "because", "although", "though", "however",
    "therefore", "thus", "hence", "more", "most", "less", "least", "other", "others", "another",
    "such", "same", "very", "much", "many", "some", "any", "all", "both", "each", "every",
    "none", "not", "no", "yes", "if", "then", "else", "also", "too", "either", "neither", "only",
    "just", "even", "still", "yet", "already", "again", "once", "twice", "here",
];
