//! Error handling types for the markup parser
//!
//! Every failure, whether it comes from scanning, tree manipulation, formatting
//! or file access, is reported as a [`ParseError`] carrying a categorized
//! [`ParseErrorKind`] and, where available, the line and column of the
//! offending input.

use std::{error::Error, fmt};
use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Location {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Format(FormatError),
    IO(IOError),
    Limit(LimitError),
    Malformed(MalformedError),
    Tree(TreeError),
    Unbalanced(UnbalancedError),
}

/// Input that does not follow the tag/attribute/text grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedError {
    #[error("Freestanding text is not allowed outside an element")]
    FreestandingText,
    #[error("Tag name is empty")]
    EmptyTagName,
    #[error("Invalid tag name: '{0}'")]
    InvalidTagName(String),
    #[error("Self-closing tags are not supported: '{0}'")]
    SelfClosingTag(String),
    #[error("Closing tag '{0}' must not carry attributes")]
    EndTagWithAttributes(String),
    #[error("Invalid attribute: '{0}'")]
    InvalidAttribute(String),
    #[error("Unterminated quote in tag: '{0}'")]
    UnterminatedQuote(String),
    #[error("Tag is not terminated by '>' before end of input")]
    UnterminatedTag,
    #[error("Document already has a root element, found another: '{0}'")]
    MultipleRoots(String),
    #[error("Document contains no element")]
    EmptyDocument,
}

/// Start and end tags that do not pair up
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnbalancedError {
    #[error("Closing tag '{0}' found while no element is open")]
    NoOpenElement(String),
    #[error("Tags don't match: expected '{expected}', found '{found}'")]
    MismatchedTag { expected: String, found: String },
    #[error("Element '{0}' is never closed")]
    UnclosedElement(String),
}

/// Configured bounds exceeded while parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    #[error("Tag exceeds maximum length of {max} bytes")]
    TagTooLong { max: usize },
    #[error("Text fragment exceeds maximum length of {max} bytes")]
    TextTooLong { max: usize },
    #[error("Maximum nesting depth of {max} exceeded")]
    MaxDepthExceeded { max: usize },
    #[error("Input exceeds maximum size of {max} bytes")]
    MaxSizeExceeded { max: usize },
    #[error("Tag exceeds maximum of {max} attributes")]
    MaxAttributesExceeded { max: usize },
}

/// Invalid operations on an already built tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Tag is already set to '{current}', cannot rename to '{requested}'")]
    TagAlreadySet { current: String, requested: String },
}

/// Failures while rendering a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid indentation: {0}")]
    InvalidIndentation(String),
    #[error("Cannot render an element without a tag")]
    UntaggedNode,
    #[error("Tag cannot be written as markup: '{0}'")]
    UnrepresentableTag(String),
    #[error("Text cannot be written as markup: '{0}'")]
    UnrepresentableText(String),
    #[error("Attribute '{0}' cannot be written as markup")]
    UnrepresentableAttribute(String),
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<MalformedError> for ParseError {
    fn from(err: MalformedError) -> Self {
        Self::new(ParseErrorKind::Malformed(err))
    }
}

impl From<UnbalancedError> for ParseError {
    fn from(err: UnbalancedError) -> Self {
        Self::new(ParseErrorKind::Unbalanced(err))
    }
}

impl From<LimitError> for ParseError {
    fn from(err: LimitError) -> Self {
        Self::new(ParseErrorKind::Limit(err))
    }
}

impl From<TreeError> for ParseError {
    fn from(err: TreeError) -> Self {
        Self::new(ParseErrorKind::Tree(err))
    }
}

impl From<FormatError> for ParseError {
    fn from(err: FormatError) -> Self {
        Self::new(ParseErrorKind::Format(err))
    }
}

impl From<IOError> for ParseError {
    fn from(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "{}", err),
            Self::IO(err) => write!(f, "{}", err),
            Self::Limit(err) => write!(f, "{}", err),
            Self::Malformed(err) => write!(f, "{}", err),
            Self::Tree(err) => write!(f, "{}", err),
            Self::Unbalanced(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "at line {}, column {}: {}", loc.line, loc.column, self.kind)?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
