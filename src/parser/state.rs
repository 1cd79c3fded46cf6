use tracing::{debug, trace};

use super::{
    config::{ParserConfig, ParsingContext},
    lexeme::TagLexeme,
};
use crate::{
    error::{MalformedError, Result, UnbalancedError},
    text::{decode, encode, to_owned_or_none, trim},
    tree::{Document, Node},
};

/// Lexical state of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// Outside any tag, collecting free text
    Normal,
    /// Inside `< ... >`
    Tag,
    /// Inside `</ ... >`
    EndTag,
}

/// Everything one parse owns: limits, lexical state and the tree under construction.
///
/// Open elements always form the rightmost path of the tree, so the current
/// node is found by walking `context.current_depth` last-children down from
/// the root. Closing an element steps that depth back up by one.
#[derive(Debug)]
pub struct ParserState {
    pub config: ParserConfig,
    pub context: ParsingContext,
    pub mode: LexState,
    root: Option<Node>,
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserState {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            context: ParsingContext::new(),
            mode: LexState::Normal,
            root: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.context.current_depth
    }

    /// Innermost open element, if any
    pub fn current_node(&self) -> Option<&Node> {
        if self.depth() == 0 {
            return None;
        }
        let mut node = self.root.as_ref()?;
        for _ in 1..self.depth() {
            node = node.children().last()?;
        }
        Some(node)
    }

    pub fn current_node_mut(&mut self) -> Option<&mut Node> {
        let depth = self.depth();
        self.node_at_depth_mut(depth)
    }

    fn node_at_depth_mut(&mut self, depth: usize) -> Option<&mut Node> {
        if depth == 0 {
            return None;
        }
        let mut node = self.root.as_mut()?;
        for _ in 1..depth {
            node = node.last_child_mut()?;
        }
        Some(node)
    }

    /// Adds a free-text fragment to the innermost open element.
    ///
    /// Whitespace-only fragments are ignored wherever they appear.
    pub fn append_text(&mut self, fragment: &[u8]) -> Result<()> {
        let trimmed = trim(fragment);
        if trimmed.is_empty() {
            return Ok(());
        }
        self.config.validate_text(trimmed)?;
        let keep = self.config.keeps_text(trimmed);

        let node = self
            .current_node_mut()
            .ok_or(MalformedError::FreestandingText)?;
        if !keep {
            trace!(len = trimmed.len(), "dropping short text fragment");
            return Ok(());
        }
        if let Some(text) = to_owned_or_none(trimmed) {
            trace!(len = text.len(), "appending inner text");
            node.append_inner_text(&text);
        }
        Ok(())
    }

    /// Start tag: creates the root or a child of the current node and descends into it.
    pub fn open_element(&mut self, lexeme: TagLexeme<'_>) -> Result<()> {
        self.config
            .validate_attribute_count(lexeme.attributes.len())?;
        let name = to_owned_or_none(lexeme.name).ok_or(MalformedError::EmptyTagName)?;

        let depth = self.depth();
        if depth == 0 && self.root.is_some() {
            return Err(MalformedError::MultipleRoots(name).into());
        }
        self.context.enter_nested(&self.config)?;

        let node = if depth == 0 {
            self.root.insert(Node::new())
        } else {
            self.node_at_depth_mut(depth)
                .ok_or_else(|| UnbalancedError::NoOpenElement(name.clone()))?
                .create_child()
        };

        debug!(tag = %name, depth = depth + 1, "opening element");
        node.set_tag(name)?;
        for (key, value) in lexeme.attributes {
            node.attributes_mut()
                .append(decode(key), to_owned_or_none(value).unwrap_or_default());
        }
        Ok(())
    }

    /// End tag: checks the name against the current node and ascends to its parent.
    pub fn close_element(&mut self, name: &[u8]) -> Result<()> {
        let found = decode(name);
        let current = self
            .current_node()
            .ok_or_else(|| UnbalancedError::NoOpenElement(found.clone()))?;

        match current.tag() {
            None => return Err(MalformedError::EmptyTagName.into()),
            Some(expected) if encode(expected).as_deref() != Some(name) => {
                return Err(UnbalancedError::MismatchedTag {
                    expected: expected.to_string(),
                    found,
                }
                .into())
            }
            Some(_) => {}
        }

        debug!(tag = %found, depth = self.depth(), "closing element");
        self.context.exit_nested();
        Ok(())
    }

    /// Completion check: input is exhausted, so every element must be closed.
    pub fn finish(self) -> Result<Document> {
        if self.depth() > 0 {
            let open = self
                .current_node()
                .and_then(Node::tag)
                .unwrap_or_default()
                .to_string();
            return Err(UnbalancedError::UnclosedElement(open).into());
        }
        match self.root {
            Some(root) => Ok(Document::new(root)),
            None => Err(MalformedError::EmptyDocument.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use crate::parser::lexeme::parse_start_tag;

    fn open(state: &mut ParserState, span: &str) -> Result<()> {
        let lexeme = parse_start_tag(span.as_bytes())?;
        state.open_element(lexeme)
    }

    #[test]
    fn test_open_text_close() -> Result<()> {
        let mut state = ParserState::new();
        open(&mut state, "a")?;
        state.append_text(b"  foo ")?;
        open(&mut state, "b x=1")?;
        assert_eq!(state.current_node().and_then(Node::tag), Some("b"));
        state.close_element(b"b")?;
        state.append_text(b"bar")?;
        state.close_element(b"a")?;

        let doc = state.finish()?;
        assert_eq!(doc.root.inner_text(), Some("foo\nbar"));
        assert_eq!(doc.root.children().len(), 1);
        Ok(())
    }

    #[test]
    fn test_text_without_open_element() {
        let mut state = ParserState::new();
        assert!(state.append_text(b" \n ").is_ok());
        let err = state.append_text(b"hello").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Malformed(MalformedError::FreestandingText)
        );
    }

    #[test]
    fn test_second_root_rejected() -> Result<()> {
        let mut state = ParserState::new();
        open(&mut state, "a")?;
        state.close_element(b"a")?;
        let err = open(&mut state, "b").unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Malformed(MalformedError::MultipleRoots("b".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_finish_reports_unclosed() -> Result<()> {
        let mut state = ParserState::new();
        open(&mut state, "a")?;
        open(&mut state, "b")?;
        state.close_element(b"b")?;
        let err = state.finish().unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Unbalanced(UnbalancedError::UnclosedElement("a".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_finish_without_elements() {
        let err = ParserState::new().finish().unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::Malformed(MalformedError::EmptyDocument)
        );
    }
}
