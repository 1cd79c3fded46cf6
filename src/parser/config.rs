use std::fmt;

use crate::error::{LimitError, ParseError, Result};

/// Maximum nesting depth (64) for open elements
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Maximum input size (4MB) to prevent memory exhaustion
pub const DEFAULT_MAX_SIZE: usize = 4_194_304; // 4MB
/// Maximum bytes between `<` and `>` of a single tag
pub const DEFAULT_MAX_TAG_LENGTH: usize = 256;
/// Maximum length of one free-text fragment (100KB)
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 102_400; // 100KB
/// Maximum number of attributes on a start tag
pub const DEFAULT_MAX_ATTRIBUTES: usize = 255;
/// Shortest trimmed text fragment that is kept
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 1;

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of open elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum span of a tag, name and attributes included
    pub max_tag_length: usize,
    /// Maximum length of a text fragment
    pub max_text_length: usize,
    /// Maximum number of attributes per start tag
    pub max_attributes: usize,
    /// Trimmed fragments shorter than this are dropped
    pub min_text_length: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug)]
pub struct ParsingContext {
    pub current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_tag_length: DEFAULT_MAX_TAG_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {}, max_tag_length: {}, max_text_length: {}, max_attributes: {}, min_text_length: {} }}",
            self.max_depth,
            self.max_size,
            self.max_tag_length,
            self.max_text_length,
            self.max_attributes,
            self.min_text_length
        )
    }
}

impl ParserConfig {
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(ParseError::from(LimitError::MaxSizeExceeded {
                max: self.max_size,
            })
            .with_context(format!(
                "Input size ({} bytes) exceeds maximum allowed ({})",
                size, self.max_size
            )));
        }
        Ok(())
    }

    pub fn validate_tag_length(&self, len: usize) -> Result<()> {
        if len > self.max_tag_length {
            return Err(LimitError::TagTooLong {
                max: self.max_tag_length,
            }
            .into());
        }
        Ok(())
    }

    pub fn validate_text(&self, text: &[u8]) -> Result<()> {
        if text.len() > self.max_text_length {
            return Err(LimitError::TextTooLong {
                max: self.max_text_length,
            }
            .into());
        }
        Ok(())
    }

    pub fn validate_attribute_count(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            return Err(LimitError::MaxAttributesExceeded {
                max: self.max_attributes,
            }
            .into());
        }
        Ok(())
    }

    /// Whether a trimmed fragment is long enough to be kept
    pub fn keeps_text(&self, trimmed: &[u8]) -> bool {
        !trimmed.is_empty() && trimmed.len() >= self.min_text_length
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        if self.current_depth >= config.max_depth {
            return Err(LimitError::MaxDepthExceeded {
                max: config.max_depth,
            }
            .into());
        }
        self.current_depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        if self.current_depth > 0 {
            self.current_depth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_depth_tracking() {
        let config = ParserConfig {
            max_depth: 2,
            ..ParserConfig::default()
        };
        let mut ctx = ParsingContext::new();
        assert!(ctx.enter_nested(&config).is_ok());
        assert!(ctx.enter_nested(&config).is_ok());

        let err = ctx.enter_nested(&config).unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Limit(LimitError::MaxDepthExceeded { max: 2 })
        );
        assert_eq!(ctx.current_depth, 2);

        ctx.exit_nested();
        ctx.exit_nested();
        ctx.exit_nested();
        assert_eq!(ctx.current_depth, 0);
    }

    #[test]
    fn test_min_text_length() {
        let config = ParserConfig {
            min_text_length: 2,
            ..ParserConfig::default()
        };
        assert!(!config.keeps_text(b""));
        assert!(!config.keeps_text(b"x"));
        assert!(config.keeps_text(b"xy"));
        assert!(ParserConfig::default().keeps_text(b"x"));
    }

    #[test]
    fn test_input_size() {
        let config = ParserConfig {
            max_size: 4,
            ..ParserConfig::default()
        };
        assert!(config.validate_input_size(4).is_ok());
        assert!(config.validate_input_size(5).is_err());
    }
}
