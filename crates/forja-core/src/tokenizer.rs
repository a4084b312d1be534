//! Word tokenizer and normalizer
//!
//! Produces maximal word runs with byte offsets into the original text.
//! Matching is done on the lowercase form; offsets always reference the
//! unnormalized input so callers can recover the original casing.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// \w+ is Unicode-aware: covers accented Spanish letters, but also digits
// and underscore, which is_word() filters out.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word regex"));

/// One token: the original surface slice and its byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Surface form as it appears in the input
    pub text: &'a str,
    /// Byte range of the surface form in the input
    pub range: Range<usize>,
}

impl<'a> Token<'a> {
    /// Lowercase normalized form used for frequency matching
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }

    /// True when the token is letters only. Tokens containing digits or
    /// underscore are never frequency candidates.
    pub fn is_word(&self) -> bool {
        self.text.chars().all(char::is_alphabetic)
    }
}

/// Lazily tokenize a text span into word-run tokens
pub fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    WORD_REGEX.find_iter(text).map(|m| Token {
        text: m.as_str(),
        range: m.range(),
    })
}
