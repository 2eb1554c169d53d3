#![no_main]
use libfuzzer_sys::fuzz_target;
use nestset::{Element, MultisetParser, ParserConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut parser) = MultisetParser::new(s) {
            if let Ok(set) = parser.parse() {
                let _ = set.to_string();
                let _ = set.canonical_form();
                let _ = set.iter().filter(|e| e.is_collection()).map(Element::fingerprint).count();
            }
        }
        if let Ok(mut parser) = MultisetParser::with_config(s, ParserConfig::strict()) {
            if let Ok(set) = parser.parse() {
                // Strictly parsed input renders back to an equal multiset
                assert_eq!(nestset::parse_strict(&set.to_string()).ok(), Some(set));
            }
        }
    }
});
