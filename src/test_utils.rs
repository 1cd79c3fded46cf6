mod comparison;
mod data;
mod fixtures;
mod helpers;

pub use comparison::{assert_documents_equal, compare_nodes};
pub use data::{read_test_file, TestData};
pub use fixtures::{INVALID_MARKUP_SAMPLES, TEST_FILES};
pub use helpers::tmp_file_path;

// Re-export common test types/traits
pub use crate::{
    error::{
        FormatError, IOError, LimitError, Location, MalformedError, ParseError, ParseErrorKind,
        Result, TreeError, UnbalancedError,
    },
    formatter::{FormatConfig, Formatter, MarkupFormatter, TreeFormatter},
    from_bytes, from_bytes_with_config, from_str, parse_file,
    parser::{
        config::{
            ParserConfig, DEFAULT_MAX_ATTRIBUTES, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE,
            DEFAULT_MAX_TAG_LENGTH, DEFAULT_MAX_TEXT_LENGTH,
        },
        MarkupParser,
    },
    text::{decode, encode},
    tree::{Attribute, AttributeList, Document, Node},
    utils::{format_markup, format_tree, parse_markup, read_file, write_file},
};
