//! # Forja Core
//!
//! Document model for the Forja note tools.
//!
//! This crate provides the pieces shared by the generator and the
//! enrichment engine:
//! - **Document**: a markdown note split into an opaque frontmatter block
//!   and a body, reassembled byte-for-byte
//! - **Frontmatter guard**: locates the `---` fenced metadata block and
//!   fails closed on unterminated blocks
//! - **Wikilink spans**: byte ranges of existing `[[...]]` markers
//! - **Tokenizer**: word runs with offsets into the original text plus a
//!   lowercase normalized form
//! - **Stopwords**: bundled Spanish/English function-word sets

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod stopwords;
pub mod tokenizer;
pub mod wikilinks;

pub use document::Document;
pub use error::{CoreError, CoreResult};
pub use stopwords::{Language, Stopwords};
pub use tokenizer::{tokenize, Token};
pub use wikilinks::MarkerRanges;
