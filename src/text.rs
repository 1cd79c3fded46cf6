//! Byte-slice text helpers shared by the scanner and the tree builder.

/// Returns `bytes` without leading and trailing ASCII whitespace.
///
/// Works on slice bounds only; an all-whitespace input yields an empty slice.
pub fn trim(bytes: &[u8]) -> &[u8] {
    bytes.trim_ascii()
}

/// Copies `bytes` into an owned string, or `None` when there is nothing to copy.
///
/// Input is single-byte text: each byte becomes the char with the same code
/// point, so the original bytes can always be recovered with [`encode`].
pub fn to_owned_or_none(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(decode(bytes))
}

/// One char per byte, no validation.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Inverse of [`decode`]; `None` if `text` holds a char above U+00FF.
pub fn encode(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}
