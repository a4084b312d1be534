//! Boundary-aware body rewriter
//!
//! Pass 2 of the engine. Every whole-word, case-insensitive occurrence of
//! a selected term outside the existing marker ranges is wrapped as
//! `[[surface]]`, keeping the original casing of the matched text.
//!
//! Disambiguation rule: candidate matches are applied left to right,
//! preferring the longest candidate at equal start; any candidate that
//! overlaps an existing marker or an already-applied wrap is skipped.
//! Single-word whole-word matches cannot overlap each other, but the rule
//! also holds if multi-word terms are ever selected.
//!
//! The rewrite is a pure function of (body, selected terms, marker
//! ranges); rewriting a second time with the same selected set is a
//! no-op, because the first pass left every qualifying occurrence inside
//! a marker.

use crate::selector::SelectedTerms;
use forja_core::MarkerRanges;
use regex::RegexBuilder;
use std::ops::Range;

/// Wrap qualifying occurrences of the selected terms in a note body
pub fn rewrite(body: &str, terms: &SelectedTerms, markers: &MarkerRanges) -> String {
    if terms.is_empty() || body.is_empty() {
        return body.to_string();
    }

    let mut candidates: Vec<Range<usize>> = Vec::new();
    for term in terms.words() {
        let pattern = format!(r"\b{}\b", regex::escape(term));
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("term regex");
        candidates.extend(re.find_iter(body).map(|m| m.range()));
    }

    // Earliest first, longest first at equal start
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));

    let mut out = String::with_capacity(body.len());
    let mut cursor = 0usize;
    for candidate in candidates {
        if candidate.start < cursor || markers.overlaps(&candidate) {
            continue;
        }
        out.push_str(&body[cursor..candidate.start]);
        out.push_str("[[");
        out.push_str(&body[candidate.clone()]);
        out.push_str("]]");
        cursor = candidate.end;
    }
    out.push_str(&body[cursor..]);
    out
}
