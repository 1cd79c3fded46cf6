#![no_main]
use libfuzzer_sys::fuzz_target;
use zmarkup::parser::MarkupParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(parser) = MarkupParser::new(data) {
        let _ = parser.parse();
    }
});
