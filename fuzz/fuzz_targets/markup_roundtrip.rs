#![no_main]
use libfuzzer_sys::fuzz_target;
use zmarkup::{from_bytes, from_bytes_with_config, text::encode, utils::format_markup, ParserConfig};

// Anything that parses and formats must parse back to the same tree.
// Quoting can lengthen tag spans, so limits on the second pass scale with the output.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = from_bytes(data) {
        if let Ok(markup) = format_markup(&doc) {
            let config = ParserConfig {
                max_size: markup.len(),
                max_tag_length: markup.len(),
                max_text_length: markup.len(),
                ..ParserConfig::default()
            };
            // Parsed text is one char per input byte, so it always encodes back
            let bytes = encode(&markup).unwrap();
            let reparsed = from_bytes_with_config(&bytes, config).unwrap();
            assert_eq!(doc, reparsed);
        }
    }
});
