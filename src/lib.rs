//! mdnum-tools: CLI filters for numbering citations and section headers in Markdown documents.
//!
//! This library provides functionality to:
//! - Rewrite `[citation](...)` placeholder links as numbered references
//! - Expand the `*INSERT REFERENCES HERE*` marker into a reference table
//! - Number ATX-style headers hierarchically (1., 1.1, 1.2, 2., ...)
//! - Read lines from file arguments or stdin, terminators intact

pub mod citations;
pub mod headers;
pub mod input;

pub use citations::{CitationNumberer, REFERENCES_MARKER};
pub use headers::HeaderEnumerator;
pub use input::{InputError, LineReader};
