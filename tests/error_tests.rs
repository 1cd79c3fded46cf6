#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use zmarkup::test_utils::*;

fn parse_err(input: &str) -> ParseError {
    match from_str(input) {
        Ok(doc) => panic!("Expected error for {:?}, got {:?}", input, doc),
        Err(e) => e,
    }
}

fn malformed(input: &str) -> MalformedError {
    match parse_err(input).kind() {
        ParseErrorKind::Malformed(err) => err.clone(),
        other => panic!("Expected malformed input for {:?}, got {:?}", input, other),
    }
}

fn unbalanced(input: &str) -> UnbalancedError {
    match parse_err(input).kind() {
        ParseErrorKind::Unbalanced(err) => err.clone(),
        other => panic!("Expected unbalanced tags for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_invalid_samples_fail() {
    for (input, description) in INVALID_MARKUP_SAMPLES {
        assert!(from_str(input).is_err(), "{} should fail: {:?}", description, input);
    }
}

#[test]
fn test_freestanding_text() {
    assert_eq!(malformed("hello<a></a>"), MalformedError::FreestandingText);
    assert_eq!(malformed("<a></a>trailing"), MalformedError::FreestandingText);
}

#[test]
fn test_freestanding_text_location() {
    let err = parse_err("\n  stray <a></a>");
    assert_eq!(err.location(), Some(&Location::new(1, 1)));
}

#[test]
fn test_closing_tag_without_open_element() {
    assert_eq!(
        unbalanced("</a>"),
        UnbalancedError::NoOpenElement("a".to_string())
    );
}

#[test]
fn test_mismatched_tags() {
    assert_eq!(
        unbalanced("<a></b>"),
        UnbalancedError::MismatchedTag {
            expected: "a".to_string(),
            found: "b".to_string(),
        }
    );
    assert_eq!(
        unbalanced("<a><b></a></b>"),
        UnbalancedError::MismatchedTag {
            expected: "b".to_string(),
            found: "a".to_string(),
        }
    );
}

#[test]
fn test_unclosed_elements() {
    assert_eq!(
        unbalanced("<a><b></b>"),
        UnbalancedError::UnclosedElement("a".to_string())
    );
    assert_eq!(
        unbalanced("<a><b>text"),
        UnbalancedError::UnclosedElement("b".to_string())
    );
}

#[test]
fn test_mismatched_high_bytes() {
    let err = from_bytes(b"<a\xff></a\xfe>").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParseErrorKind::Unbalanced(UnbalancedError::MismatchedTag {
            expected: "a\u{ff}".to_string(),
            found: "a\u{fe}".to_string(),
        })
    );

    let doc = from_bytes(b"<a\xff>\xe9t\xe9</a\xff>").unwrap();
    assert_eq!(doc.root.tag(), Some("a\u{ff}"));
    assert_eq!(doc.root.inner_text(), Some("\u{e9}t\u{e9}"));
}

#[test]
fn test_attributes_must_be_separated() {
    assert_eq!(
        malformed(r#"<a x="1"y="2"></a>"#),
        MalformedError::InvalidAttribute(r#"x="1"y="2""#.to_string())
    );
    assert_eq!(
        malformed(r#"<a x=a"b"></a>"#),
        MalformedError::InvalidAttribute(r#"x=a"b""#.to_string())
    );
}

#[test]
fn test_closing_tag_with_attributes() {
    assert_eq!(
        malformed(r#"<a></a x="1">"#),
        MalformedError::EndTagWithAttributes("a".to_string())
    );
}

#[test]
fn test_empty_tag_names() {
    assert_eq!(malformed("<></>"), MalformedError::EmptyTagName);
    assert_eq!(malformed("<a></ >"), MalformedError::EmptyTagName);
    assert_eq!(malformed("<  x=\"1\"></a>"), MalformedError::InvalidTagName("x=\"1\"".to_string()));
}

#[test]
fn test_unsupported_constructs() {
    assert_eq!(
        malformed("<a><b/></a>"),
        MalformedError::SelfClosingTag("b".to_string())
    );
    assert_eq!(
        malformed("<a><b x=\"1\" /></a>"),
        MalformedError::SelfClosingTag("b".to_string())
    );
    assert!(matches!(
        malformed("<?xml version=\"1.0\"?><a></a>"),
        MalformedError::InvalidTagName(_)
    ));
    assert!(matches!(
        malformed("<a><!-- note --></a>"),
        MalformedError::InvalidTagName(_)
    ));
}

#[test]
fn test_attribute_errors() {
    assert_eq!(
        malformed("<a x></a>"),
        MalformedError::InvalidAttribute("x".to_string())
    );
    assert!(matches!(
        malformed("<a x=\"1></a>"),
        MalformedError::UnterminatedQuote(_)
    ));
}

#[test]
fn test_unterminated_tags() {
    assert_eq!(malformed("<a></a"), MalformedError::UnterminatedTag);
    assert_eq!(malformed("<a></a><"), MalformedError::UnterminatedTag);
    assert_eq!(malformed("<a></"), MalformedError::UnterminatedTag);
}

#[test]
fn test_document_shape() {
    assert_eq!(malformed(""), MalformedError::EmptyDocument);
    assert_eq!(malformed("   \n  "), MalformedError::EmptyDocument);
    assert_eq!(
        malformed("<a></a><b></b>"),
        MalformedError::MultipleRoots("b".to_string())
    );
}

#[test]
fn test_error_display_names_offending_tag() {
    let err = parse_err("<root>\n  <item></other>\n</root>");
    let message = err.to_string();
    assert!(message.starts_with("at line 2, column 9"), "{}", message);
    assert!(message.contains("expected 'item', found 'other'"));
    assert!(message.contains("Context: in tag </other>"));
}
