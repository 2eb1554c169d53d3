use super::{helpers, CommonFormatter, FormatConfig, Formatter};
use crate::element::Element;
use crate::multiset::Multiset;

/// Single-line brace notation: `{a, b, {c}}`
pub struct CompactFormatter;

impl CommonFormatter for CompactFormatter {}

impl Formatter for CompactFormatter {
    fn format(&self, set: &Multiset, config: &FormatConfig) -> String {
        Self::format_set(set, config)
    }
}

impl CompactFormatter {
    fn format_set(set: &Multiset, config: &FormatConfig) -> String {
        if set.is_empty() {
            return helpers::format_empty_set();
        }

        let items: Vec<String> = Self::ordered(set, config)
            .into_iter()
            .map(|element| Self::format_element(element, config))
            .collect();
        helpers::join_inline(items)
    }

    fn format_element(element: &Element, config: &FormatConfig) -> String {
        match element {
            Element::Atomic(text) => text.clone(),
            Element::Nested(set) => Self::format_set(set, config),
        }
    }
}
