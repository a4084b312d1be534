//! # Forja Generator
//!
//! Converts a CSV idea-inbox export into a folder of Obsidian-compatible
//! markdown notes, one per row. Each note gets YAML frontmatter (id,
//! title, and the optional estado/tipo/fuente/tags/links fields), an
//! `## Idea` body section, and - when the row has explicit connections -
//! a `## Conexiones` section plus `[[wikilinks]]` extracted from quoted
//! spans in the connections cell.
//!
//! Column access goes through an explicit [`ColumnSchema`]: every
//! expected header is named up front, and an absent column or blank cell
//! falls back to a documented default instead of failing the row.

pub mod error;
pub mod generator;
pub mod note;
pub mod schema;
pub mod stats;

pub use error::{GeneratorError, GeneratorResult};
pub use generator::{GenerateConfig, Generator};
pub use note::{build_note, extract_links, slugify, split_tags, NoteFrontmatter};
pub use schema::{ColumnSchema, RowFields};
pub use stats::GenerationStats;
