use super::{CommonFormatter, FormatConfig, Formatter};
use crate::{
    error::Result,
    tree::{Document, Node},
};

/// Debug outline of a document.
///
/// One `tag: text` line per element with its `arg: { key = .., value = .. }`
/// lines and children indented beneath it.
pub struct TreeFormatter;

impl CommonFormatter for TreeFormatter {}

impl Formatter for TreeFormatter {
    fn format(&self, document: &Document, config: &FormatConfig) -> Result<String> {
        let mut lines = Vec::new();
        Self::format_node(&document.root, 0, config, &mut lines)?;
        Ok(lines.join("\n"))
    }
}

impl TreeFormatter {
    fn format_node(
        node: &Node,
        level: usize,
        config: &FormatConfig,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let indent = Self::create_indentation(level, config)?;
        let arg_indent = Self::create_indentation(level + 1, config)?;

        let text = node.inner_text().unwrap_or_default().replace('\n', "\\n");
        let line = format!("{}{}: {}", indent, node.tag().unwrap_or("<untagged>"), text);
        lines.push(line.trim_end().to_string());

        node.attributes().for_each(|attr| {
            lines.push(format!(
                "{}arg: {{ key = {}, value = {} }}",
                arg_indent, attr.key, attr.value
            ));
        });

        for child in node.children() {
            Self::format_node(child, level + 1, config, lines)?;
        }
        Ok(())
    }
}
