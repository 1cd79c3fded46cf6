use super::{CommonFormatter, FormatConfig, Formatter};
use crate::{
    error::{FormatError, Result},
    tree::{Attribute, Document, Node},
};

/// Writes a document back out as markup the parser accepts.
///
/// Each element starts on its own line; inner text follows the start tag
/// and children come after it. Leaf elements stay on a single line.
pub struct MarkupFormatter;

impl CommonFormatter for MarkupFormatter {}

impl Formatter for MarkupFormatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> Result<String> {
        let mut out = String::new();
        Self::format_node(&document.root, 0, config, &mut out)?;
        Ok(out)
    }
}

impl MarkupFormatter {
    fn format_node(node: &Node, level: usize, config: &FormatConfig, out: &mut String) -> Result<()> {
        let tag = node.tag().ok_or(FormatError::UntaggedNode)?;
        if !is_valid_tag(tag) {
            return Err(FormatError::UnrepresentableTag(tag.to_string()).into());
        }
        let indent = Self::create_indentation(level, config)?;

        out.push_str(&indent);
        out.push('<');
        out.push_str(tag);
        for attr in node.attributes() {
            out.push(' ');
            out.push_str(&Self::format_attribute(attr)?);
        }
        out.push('>');

        if let Some(text) = node.inner_text() {
            if text.contains(['<', '\0']) {
                return Err(FormatError::UnrepresentableText(text.to_string()).into());
            }
            out.push_str(text);
        }

        if !node.children().is_empty() {
            for child in node.children() {
                out.push('\n');
                Self::format_node(child, level + 1, config, out)?;
            }
            out.push('\n');
            out.push_str(&indent);
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    fn format_attribute(attr: &Attribute) -> Result<String> {
        let unrepresentable = || FormatError::UnrepresentableAttribute(attr.key.clone());

        if !is_valid_key(&attr.key) || attr.value.contains(['>', '\0']) {
            return Err(unrepresentable().into());
        }
        let quote = match (attr.value.contains('"'), attr.value.contains('\'')) {
            (false, _) => '"',
            (true, false) => '\'',
            (true, true) => return Err(unrepresentable().into()),
        };
        Ok(format!("{}={}{}{}", attr.key, quote, attr.value, quote))
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && !tag.starts_with(['!', '?'])
        && !tag.contains(|c: char| c.is_ascii_whitespace() || "=\"'</>\0".contains(c))
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(|c: char| c.is_ascii_whitespace() || "=\"'<>\0".contains(c))
}
