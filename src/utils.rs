use crate::{
    error::{IOError, ParseError, Result},
    formatter::{FormatConfig, Formatter, MarkupFormatter, TreeFormatter},
    parser::{MarkupParser, ParserConfig},
    tree::Document,
};
use std::{fs, io};

pub fn read_file(path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::ReadError(format!("{}: {}", path, e)),
        };
        ParseError::from(kind).with_source(e)
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::WriteError(format!("{}: {}", path, e)),
        };
        ParseError::from(kind).with_source(e)
    })
}

pub fn parse_markup(content: &str) -> Result<Document> {
    parse_markup_bytes(content.as_bytes(), ParserConfig::default())
}

pub fn parse_markup_bytes(content: &[u8], config: ParserConfig) -> Result<Document> {
    MarkupParser::with_config(content, config)?.parse()
}

pub fn format_markup(document: &Document) -> Result<String> {
    MarkupFormatter.format(document, &FormatConfig::default())
}

pub fn format_tree(document: &Document) -> Result<String> {
    TreeFormatter.format(document, &FormatConfig::default())
}
