use super::{helpers, CommonFormatter, CompactFormatter, FormatConfig, Formatter};
use crate::element::Element;
use crate::multiset::Multiset;

/// Indented multi-line notation.
///
/// Multisets that hold only atoms stay on one line.
pub struct PrettyFormatter;

impl CommonFormatter for PrettyFormatter {}

impl Formatter for PrettyFormatter {
    fn format(&self, set: &Multiset, config: &FormatConfig) -> String {
        Self::format_set(set, 0, config)
    }
}

impl PrettyFormatter {
    fn format_set(set: &Multiset, indent: usize, config: &FormatConfig) -> String {
        if !set.iter().any(Element::is_collection) {
            return CompactFormatter.format(set, config);
        }

        let (indent_str, inner_indent) = Self::create_indentation(indent, config);
        let items: Vec<String> = Self::ordered(set, config)
            .into_iter()
            .map(|element| {
                format!(
                    "{}{}",
                    inner_indent,
                    Self::format_element(element, indent + 1, config)
                )
            })
            .collect();

        format!("{{\n{}\n{}}}", helpers::join_lines(items), indent_str)
    }

    fn format_element(element: &Element, indent: usize, config: &FormatConfig) -> String {
        match element {
            Element::Atomic(text) => text.clone(),
            Element::Nested(set) => Self::format_set(set, indent, config),
        }
    }
}
