//! Existing-marker guard
//!
//! Scans body text for Obsidian-style `[[...]]` spans and exposes their
//! byte ranges. Existing markers are immutable: the rewriter never inserts
//! a boundary inside one and never wraps text that overlaps one.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[[^\]]+\]\]").expect("wikilink regex"));

/// Byte ranges of every existing `[[...]]` marker in a body, in document
/// order.
#[derive(Debug, Clone, Default)]
pub struct MarkerRanges {
    ranges: Vec<Range<usize>>,
}

impl MarkerRanges {
    /// Scan a body for existing wikilink spans
    pub fn scan(body: &str) -> Self {
        let ranges = WIKILINK_REGEX
            .find_iter(body)
            .map(|m| m.range())
            .collect();
        Self { ranges }
    }

    /// Check if a byte offset falls inside any marker
    pub fn covers(&self, offset: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&offset))
    }

    /// Check if a candidate range overlaps any marker
    pub fn overlaps(&self, candidate: &Range<usize>) -> bool {
        self.ranges
            .iter()
            .any(|r| candidate.start < r.end && r.start < candidate.end)
    }

    /// Number of markers found
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when the body has no markers
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the marker ranges in document order
    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }
}
