//! Frontmatter block guard
//!
//! Locates the YAML frontmatter fenced by `---` lines at the start of a
//! document. The block is opaque to everything downstream: it is preserved
//! byte-for-byte and excluded from tokenization and rewriting.
//!
//! A document that opens a fence and never closes it is malformed. The
//! guard fails closed by returning [`CoreError::UnterminatedFrontmatter`]
//! instead of letting a half-open block be scanned as body text.

use crate::error::{CoreError, CoreResult};

/// Split a document into its raw frontmatter block (fences included) and
/// the body that follows it.
///
/// Returns `(None, content)` when the document has no frontmatter.
pub fn split(content: &str) -> CoreResult<(Option<&str>, &str)> {
    match locate(content)? {
        Some(end) => Ok((Some(&content[..end]), &content[end..])),
        None => Ok((None, content)),
    }
}

/// Locate the frontmatter block, returning the byte offset one past its
/// closing fence (i.e. the start of the body).
pub fn locate(content: &str) -> CoreResult<Option<usize>> {
    if let Some(rest) = content.strip_prefix("---\n") {
        return locate_close(rest, 4, "\n---\n", "\n---");
    }

    // Windows line endings
    if let Some(rest) = content.strip_prefix("---\r\n") {
        return locate_close(rest, 5, "\r\n---\r\n", "\r\n---");
    }

    Ok(None)
}

fn locate_close(
    rest: &str,
    prefix_len: usize,
    close: &str,
    close_at_eof: &str,
) -> CoreResult<Option<usize>> {
    if let Some(idx) = rest.find(close) {
        return Ok(Some(prefix_len + idx + close.len()));
    }
    // A fence on the very last line closes the block too
    if rest.ends_with(close_at_eof) {
        return Ok(Some(prefix_len + rest.len()));
    }
    Err(CoreError::UnterminatedFrontmatter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_frontmatter_and_body() {
        let content = "---\nid: idea-001\ntitle: \"Test\"\n---\n\n## Idea\nBody text\n";
        let (fm, body) = split(content).unwrap();
        assert_eq!(fm, Some("---\nid: idea-001\ntitle: \"Test\"\n---\n"));
        assert_eq!(body, "\n## Idea\nBody text\n");
    }

    #[test]
    fn no_frontmatter_returns_whole_body() {
        let content = "## Idea\nJust body\n";
        let (fm, body) = split(content).unwrap();
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn reassembly_is_byte_identical() {
        let content = "---\nid: x\n---\nbody with [[link]]\n";
        let (fm, body) = split(content).unwrap();
        let rebuilt = format!("{}{}", fm.unwrap(), body);
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn unterminated_block_fails_closed() {
        let content = "---\nid: x\ntitle: never closed\n";
        assert!(matches!(
            split(content),
            Err(CoreError::UnterminatedFrontmatter)
        ));
    }

    #[test]
    fn closing_fence_at_eof() {
        let content = "---\nid: x\n---";
        let (fm, body) = split(content).unwrap();
        assert_eq!(fm, Some(content));
        assert_eq!(body, "");
    }

    #[test]
    fn crlf_frontmatter() {
        let content = "---\r\nid: x\r\n---\r\nbody\r\n";
        let (fm, body) = split(content).unwrap();
        assert_eq!(fm, Some("---\r\nid: x\r\n---\r\n"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn dashes_inside_body_are_not_a_fence() {
        let content = "no frontmatter here\n---\nstill body\n";
        let (fm, _) = split(content).unwrap();
        assert!(fm.is_none());
    }
}
