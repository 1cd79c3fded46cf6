//! Single-pass markup parser.
//!
//! The scanner walks the input once, switching between three lexical states:
//! - `Normal`: free text is collected until the next `<`
//! - `Tag`: the span up to `>` is split into a name and attributes and a new
//!   element is opened beneath the current one
//! - `EndTag`: the span up to `>` must name the current element, which is closed
//!
//! Parsing succeeds only when the input is exhausted with every element closed.

use tracing::{debug, warn};

use super::{
    config::ParserConfig,
    cursor::Cursor,
    lexeme::{parse_end_tag, parse_start_tag},
    state::{LexState, ParserState},
};
use crate::{
    error::{Location, MalformedError, ParseError, Result},
    text::decode,
    tree::Document,
};

/// Parser for one markup buffer
#[derive(Debug)]
pub struct MarkupParser<'a> {
    /// Scan position over the input
    cursor: Cursor<'a>,
    /// Limits, lexical state and the tree being built
    state: ParserState,
    /// Offset where the pending free text begins
    text_start: usize,
    /// Where the pending free text begins, for diagnostics
    text_location: Location,
    /// Where the tag being scanned begins, for diagnostics
    tag_location: Location,
}

impl<'a> MarkupParser<'a> {
    /// Creates a parser with the default limits
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Result<Self> {
        config.validate_input_size(input.len())?;

        let cursor = Cursor::new(input);
        let start = cursor.location();
        Ok(Self {
            cursor,
            state: ParserState::with_config(config),
            text_start: 0,
            text_location: start,
            tag_location: start,
        })
    }

    /// Parses the whole input into a document.
    ///
    /// Consumes the parser; a failed parse leaves nothing behind.
    pub fn parse(self) -> Result<Document> {
        let result = self.run();
        if let Err(err) = &result {
            warn!("{}", err);
        }
        result
    }

    fn run(mut self) -> Result<Document> {
        while let Some(byte) = self.cursor.current() {
            match self.state.mode {
                LexState::Normal => self.step_normal(byte)?,
                LexState::Tag => self.step_tag(false)?,
                LexState::EndTag => self.step_tag(true)?,
            }
        }
        if self.state.mode != LexState::Normal {
            return Err(self.at_tag(MalformedError::UnterminatedTag.into()));
        }
        self.flush_text()?;

        let end = self.cursor.location();
        let document = self
            .state
            .finish()
            .map_err(|err| err.with_location(end.line, end.column))?;
        debug!(elements = document.element_count(), "parsing completed");
        Ok(document)
    }

    fn step_normal(&mut self, byte: u8) -> Result<()> {
        if byte != b'<' {
            self.cursor.advance();
            return Ok(());
        }

        self.tag_location = self.cursor.location();
        self.flush_text()?;
        self.cursor.advance();
        self.state.mode = if self.cursor.consume(b'/') {
            LexState::EndTag
        } else {
            LexState::Tag
        };
        Ok(())
    }

    fn step_tag(&mut self, closing: bool) -> Result<()> {
        let start = self.cursor.pos();
        loop {
            match self.cursor.current() {
                Some(b'>') => break,
                Some(_) => {
                    self.cursor.advance();
                    self.state
                        .config
                        .validate_tag_length(self.cursor.pos() - start)
                        .map_err(|err| self.at_tag(err))?;
                }
                None => return Err(self.at_tag(MalformedError::UnterminatedTag.into())),
            }
        }

        let span = self.cursor.slice_from(start);
        self.cursor.advance();

        let result = if closing {
            parse_end_tag(span).and_then(|name| self.state.close_element(name))
        } else {
            parse_start_tag(span).and_then(|lexeme| self.state.open_element(lexeme))
        };
        result.map_err(|err| {
            let marker = if closing { "</" } else { "<" };
            self.at_tag(err)
                .with_context(format!("in tag {}{}>", marker, decode(span)))
        })?;

        self.state.mode = LexState::Normal;
        self.text_start = self.cursor.pos();
        self.text_location = self.cursor.location();
        Ok(())
    }

    /// Hands the text collected since the last tag to the current element
    fn flush_text(&mut self) -> Result<()> {
        let fragment = self.cursor.slice_from(self.text_start);
        let location = self.text_location;
        self.state
            .append_text(fragment)
            .map_err(|err| err.with_location(location.line, location.column))
    }

    fn at_tag(&self, err: ParseError) -> ParseError {
        err.with_location(self.tag_location.line, self.tag_location.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LimitError, ParseErrorKind, UnbalancedError};

    fn parse(input: &str) -> Result<Document> {
        MarkupParser::new(input.as_bytes())?.parse()
    }

    #[test]
    fn test_parse_simple_element() -> Result<()> {
        let doc = parse("<root></root>")?;
        assert_eq!(doc.root.tag(), Some("root"));
        assert!(doc.root.children().is_empty());
        assert_eq!(doc.root.inner_text(), None);
        Ok(())
    }

    #[test]
    fn test_parse_nested_with_text() -> Result<()> {
        let doc = parse("<a>foo<b>inner</b>bar</a>")?;
        assert_eq!(doc.root.inner_text(), Some("foo\nbar"));
        let b = doc.root.child(0)?;
        assert_eq!(b.tag(), Some("b"));
        assert_eq!(b.inner_text(), Some("inner"));
        Ok(())
    }

    #[test]
    fn test_error_location_points_at_tag() {
        let err = parse("<a>\n  </b>").unwrap_err();
        assert_eq!(err.location(), Some(&Location::new(2, 3)));
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Unbalanced(UnbalancedError::MismatchedTag { .. })
        ));
        assert_eq!(err.context(), Some("in tag </b>"));
    }

    #[test]
    fn test_unterminated_tag() {
        let err = parse("<a><b").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Malformed(MalformedError::UnterminatedTag)
        );
    }

    #[test]
    fn test_tag_length_limit() {
        let config = ParserConfig {
            max_tag_length: 8,
            ..ParserConfig::default()
        };
        let ok = MarkupParser::with_config(b"<abcdefgh></abcdefgh>", config.clone())
            .and_then(MarkupParser::parse);
        assert!(ok.is_ok());

        let err = MarkupParser::with_config(b"<abcdefghi></abcdefghi>", config)
            .and_then(MarkupParser::parse)
            .unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Limit(LimitError::TagTooLong { max: 8 })
        );
    }

    #[test]
    fn test_stops_at_nul() -> Result<()> {
        let doc = MarkupParser::new(b"<a>x</a>\0garbage<<<")?.parse()?;
        assert_eq!(doc.root.inner_text(), Some("x"));
        Ok(())
    }
}
