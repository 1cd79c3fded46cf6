pub const TEST_FILES: [&str; 3] = [
    "tests/input/small.xml",
    "tests/input/file.xml",
    "tests/input/large.xml",
];

pub const INVALID_MARKUP_SAMPLES: [(&str, &str); 11] = [
    ("hello<a></a>", "Freestanding text before the first tag"),
    ("</a>", "Closing tag with nothing open"),
    ("<a></b>", "Mismatched closing tag"),
    ("<a><b></a></b>", "Crossed nesting"),
    ("<a><b></b>", "Unclosed root"),
    ("<a></a x=\"1\">", "Attributes on a closing tag"),
    ("<></>", "Empty tag name"),
    ("<a><b/></a>", "Self-closing tag"),
    ("<a></a><b></b>", "Second top-level element"),
    ("<a x></a>", "Attribute without a value"),
    ("<a x=\"1\"y=\"2\"></a>", "Attributes not separated by whitespace"),
];
