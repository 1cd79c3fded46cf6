//! zMarkup: a small single-pass parser for XML-like markup
//!
//! This crate provides functionality to:
//! - Parse a markup buffer into an element tree with attributes and inner text
//! - Enforce configurable limits on tag length, text length, depth and input size
//! - Render parsed trees back to markup or as a debug outline
//! - Handle errors with detailed context
//!
//! Namespaces, entities, CDATA, comments, processing instructions,
//! self-closing tags and DTDs are not supported.
//!
//! # Examples
//! ```
//! use zmarkup::{from_str, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = from_str(r#"<note lang="en">hi<to>you</to></note>"#)?;
//!     assert_eq!(doc.root.tag(), Some("note"));
//!     assert_eq!(doc.root.attributes().value_of("lang"), Some("en"));
//!     assert_eq!(doc.root.inner_text(), Some("hi"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod error;
pub mod formatter;
pub mod parser;
pub mod test_utils;
pub mod text;
pub mod tree;
pub mod utils;

// Re-exports
pub use error::{ParseError, ParseErrorKind, Result};
pub use formatter::{FormatConfig, Formatter, MarkupFormatter, TreeFormatter};
pub use parser::{MarkupParser, ParserConfig};
pub use tree::{Attribute, AttributeList, Document, Node};

/// Parse markup from a string
pub fn from_str(s: &str) -> Result<Document> {
    from_bytes(s.as_bytes())
}

/// Parse markup from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    MarkupParser::new(bytes)?.parse()
}

/// Parse with custom limits
pub fn from_bytes_with_config(bytes: &[u8], config: ParserConfig) -> Result<Document> {
    MarkupParser::with_config(bytes, config)?.parse()
}

/// Read a file and parse it with default limits
#[instrument]
pub fn parse_file(path: &str) -> Result<Document> {
    parse_file_with_config(path, ParserConfig::default())
}

#[instrument(skip(config))]
pub fn parse_file_with_config(path: &str, config: ParserConfig) -> Result<Document> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;
    info!(bytes = content.len(), "File read successfully");

    let document = from_bytes_with_config(&content, config)?;
    debug!("Parsing completed");
    Ok(document)
}
