//! Splitting a tag span (the bytes between `<` and `>`) into a name and attributes.

use crate::error::{MalformedError, Result};
use crate::text::{decode, trim};

/// Name and attributes of a start tag, borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLexeme<'a> {
    pub name: &'a [u8],
    pub attributes: Vec<(&'a [u8], &'a [u8])>,
}

/// Splits a start-tag span into its name and `key=value` pairs, in written order.
pub fn parse_start_tag(span: &[u8]) -> Result<TagLexeme<'_>> {
    let trimmed = trim(span);
    if trimmed.last() == Some(&b'/') {
        let name = split_tokens(trimmed)?
            .first()
            .map(|token| decode(token.strip_suffix(b"/").unwrap_or(*token)))
            .unwrap_or_default();
        return Err(MalformedError::SelfClosingTag(name).into());
    }

    let mut tokens = split_tokens(span)?.into_iter();
    let name = tokens.next().ok_or(MalformedError::EmptyTagName)?;
    validate_name(name)?;

    let attributes = tokens.map(split_attribute).collect::<Result<Vec<_>>>()?;
    Ok(TagLexeme { name, attributes })
}

/// Extracts the name of an end-tag span, rejecting anything after it.
pub fn parse_end_tag(span: &[u8]) -> Result<&[u8]> {
    let tokens = split_tokens(span)?;
    let mut tokens = tokens.into_iter();
    let name = tokens.next().ok_or(MalformedError::EmptyTagName)?;
    if tokens.next().is_some() {
        return Err(MalformedError::EndTagWithAttributes(decode(name)).into());
    }
    validate_name(name)?;
    Ok(name)
}

/// Splits on ASCII whitespace outside quotes.
///
/// Whitespace on either side of `=` does not split, so `a = "1"` stays one token.
pub fn split_tokens(span: &[u8]) -> Result<Vec<&[u8]>> {
    let mut merged: Vec<(usize, usize)> = Vec::new();
    let mut glue_next = false;

    for (start, end) in raw_pieces(span)? {
        let piece = span.get(start..end).unwrap_or_default();
        let glue_prev = piece.first() == Some(&b'=');
        match merged.last_mut() {
            Some(last) if glue_next || glue_prev => last.1 = end,
            _ => merged.push((start, end)),
        }
        glue_next = piece.last() == Some(&b'=');
    }

    Ok(merged
        .into_iter()
        .map(|(start, end)| span.get(start..end).unwrap_or_default())
        .collect())
}

fn raw_pieces(span: &[u8]) -> Result<Vec<(usize, usize)>> {
    let mut pieces = Vec::new();
    let mut start = None;
    let mut quote = None;

    for (i, &b) in span.iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None if b.is_ascii_whitespace() => {
                if let Some(s) = start.take() {
                    pieces.push((s, i));
                }
            }
            None => {
                if start.is_none() {
                    start = Some(i);
                }
                if is_quote(b) {
                    quote = Some(b);
                }
            }
        }
    }

    if quote.is_some() {
        return Err(MalformedError::UnterminatedQuote(decode(span)).into());
    }
    if let Some(s) = start {
        pieces.push((s, span.len()));
    }
    Ok(pieces)
}

fn split_attribute(token: &[u8]) -> Result<(&[u8], &[u8])> {
    let invalid = || MalformedError::InvalidAttribute(decode(token));

    let eq = token.iter().position(|&b| b == b'=').ok_or_else(invalid)?;
    let key = trim(token.get(..eq).unwrap_or_default());
    let value = trim(token.get(eq + 1..).unwrap_or_default());

    if key.is_empty() || key.iter().copied().any(is_quote) {
        return Err(invalid().into());
    }
    let value = unquote(value).ok_or_else(invalid)?;
    Ok((key, value))
}

/// A quoted value must end at its closing quote; an unquoted one holds no quotes.
fn unquote(value: &[u8]) -> Option<&[u8]> {
    match value.split_first() {
        Some((&open, rest)) if is_quote(open) => {
            let close = rest.iter().position(|&b| b == open)?;
            (close + 1 == rest.len()).then(|| rest.get(..close).unwrap_or_default())
        }
        _ => (!value.iter().copied().any(is_quote)).then_some(value),
    }
}

fn validate_name(name: &[u8]) -> Result<()> {
    if name.is_empty() {
        return Err(MalformedError::EmptyTagName.into());
    }
    let unsupported = matches!(name.first(), Some(b'!' | b'?'));
    let bad_byte = name
        .iter()
        .any(|&b| matches!(b, b'=' | b'"' | b'\'' | b'<' | b'/'));
    if unsupported || bad_byte {
        return Err(MalformedError::InvalidTagName(decode(name)).into());
    }
    Ok(())
}

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}
