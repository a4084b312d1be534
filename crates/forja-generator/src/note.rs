//! Note assembly
//!
//! Slug rules, frontmatter emission, tag splitting, quoted-connection
//! extraction, and the final markdown layout for one generated note.

use crate::error::GeneratorResult;
use crate::schema::RowFields;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static NON_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\- ]").expect("slug regex"));
static TAG_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;,]").expect("tag split regex"));
// Straight or curly double quotes around a connection title
static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["“”](.*?)["“”]"#).expect("quoted span regex"));

/// Maximum slug length in characters
pub const SLUG_MAX_LEN: usize = 60;

/// Frontmatter fields for one generated note, emitted in declaration
/// order; optional fields are omitted entirely when absent.
#[derive(Debug, Clone, Serialize)]
pub struct NoteFrontmatter {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuente: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

/// Create a filesystem-safe slug from a title
pub fn slugify(text: &str) -> String {
    let collapsed = WHITESPACE_REGEX.replace_all(text.trim(), " ");
    let truncated: String = collapsed.chars().take(SLUG_MAX_LEN).collect();
    let cleaned = NON_SLUG_REGEX.replace_all(&truncated, "");
    let slug = cleaned.trim().replace(' ', "-");
    if slug.is_empty() {
        "note".to_string()
    } else {
        slug
    }
}

/// Split a tags cell on commas and semicolons, dropping blanks
pub fn split_tags(cell: &str) -> Vec<String> {
    TAG_SPLIT_REGEX
        .split(cell)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract wikilinks from a connections cell.
///
/// Quoted spans become `[[span]]` links; when nothing is quoted, the raw
/// text is kept as a single link entry so the connection is not lost.
pub fn extract_links(cell: &str) -> Vec<String> {
    let text = cell.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let links: Vec<String> = QUOTED_REGEX
        .captures_iter(text)
        .filter_map(|cap| {
            let inner = cap.get(1)?.as_str().trim();
            if inner.is_empty() {
                None
            } else {
                Some(format!("[[{inner}]]"))
            }
        })
        .collect();

    if links.is_empty() {
        vec![text.to_string()]
    } else {
        links
    }
}

/// Assemble the full markdown content for one note
pub fn build_note(id: &str, row_number: usize, fields: &RowFields) -> GeneratorResult<String> {
    let title = fields
        .idea
        .clone()
        .unwrap_or_else(|| format!("Idea {row_number}"));

    let frontmatter = NoteFrontmatter {
        id: id.to_string(),
        title: title.clone(),
        estado: fields.estado.clone(),
        tipo: fields.tipo.clone(),
        fuente: fields.fuente.clone(),
        tags: fields.tags.as_deref().map(split_tags).unwrap_or_default(),
        links: fields
            .conexiones
            .as_deref()
            .map(extract_links)
            .unwrap_or_default(),
    };
    let yaml = serde_yaml::to_string(&frontmatter)?;

    let mut content = format!("---\n{yaml}---\n\n## Idea\n{title}\n");
    if let Some(conexiones) = &fields.conexiones {
        content.push_str(&format!("\n## Conexiones\n{conexiones}\n"));
    }
    Ok(content)
}
