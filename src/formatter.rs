mod markup;
mod tree;

pub use self::{markup::MarkupFormatter, tree::TreeFormatter};
use crate::{
    error::{FormatError, ParseError, Result},
    tree::Document,
};

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

/// Trait for rendering a parsed document as a string
pub trait Formatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> Result<String>;
}

/// Functionality shared between the markup and tree formatters
pub trait CommonFormatter {
    /// Indentation string for the given nesting level
    fn create_indentation(level: usize, config: &FormatConfig) -> Result<String> {
        Self::validate_config(config)?;
        Ok(" ".repeat(level * config.indent_spaces))
    }

    fn validate_config(config: &FormatConfig) -> Result<()> {
        if config.indent_spaces > 8 {
            return Err(ParseError::from(FormatError::InvalidIndentation(format!(
                "Indentation of {} spaces exceeds maximum allowed (8)",
                config.indent_spaces
            )))
            .with_context("Invalid formatting configuration"));
        }
        Ok(())
    }
}
