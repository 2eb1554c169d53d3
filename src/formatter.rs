mod compact;
mod pretty;

pub use self::{compact::CompactFormatter, pretty::PrettyFormatter};
use crate::element::Element;
use crate::multiset::Multiset;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
    /// Whether to print elements in canonical order at every level
    pub sort_elements: bool,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            sort_elements: false,
        }
    }
}

/// Trait for formatting a Multiset as a string
pub trait Formatter {
    fn format(&self, set: &Multiset, config: &FormatConfig) -> String;
}

/// Common formatting functionality shared between formatters
pub trait CommonFormatter {
    /// Elements in the order they should be printed
    fn ordered<'a>(set: &'a Multiset, config: &FormatConfig) -> Vec<&'a Element> {
        if config.sort_elements {
            set.sorted()
        } else {
            set.iter().collect()
        }
    }

    /// Creates indentation strings
    fn create_indentation(indent: usize, config: &FormatConfig) -> (String, String) {
        let indent_str = " ".repeat(indent * config.indent_spaces);
        let inner_indent = " ".repeat((indent + 1) * config.indent_spaces);
        (indent_str, inner_indent)
    }
}

/// Helper functions for formatting collections
pub mod helpers {
    pub fn format_empty_set() -> String {
        "{}".to_string()
    }

    pub fn join_inline(items: Vec<String>) -> String {
        format!("{{{}}}", items.join(", "))
    }

    pub fn join_lines(items: Vec<String>) -> String {
        items.join(",\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_compact_matches_display() -> crate::Result<()> {
        let set = parse("{b, {d, c}, a, {}}")?;
        let compact = CompactFormatter.format(&set, &FormatConfig::default());
        assert_eq!(compact, set.to_string());
        Ok(())
    }

    #[test]
    fn test_sorted_output_is_canonical() -> crate::Result<()> {
        let config = FormatConfig {
            sort_elements: true,
            ..FormatConfig::default()
        };
        let left = parse("{b, {d, c}, a}")?;
        let right = parse("{{c, d}, a, b}")?;
        let formatted = CompactFormatter.format(&left, &config);
        assert_eq!(formatted, "{a, b, {c, d}}");
        assert_eq!(formatted, CompactFormatter.format(&right, &config));
        Ok(())
    }

    #[test]
    fn test_pretty_layout() -> crate::Result<()> {
        let set = parse("{a, {b, c}, {{}}}")?;
        let pretty = PrettyFormatter.format(&set, &FormatConfig::default());
        assert_eq!(pretty, "{\n  a,\n  {b, c},\n  {\n    {}\n  }\n}");
        assert_eq!(parse(&pretty)?, set);
        Ok(())
    }

    #[test]
    fn test_pretty_inline_for_flat_sets() -> crate::Result<()> {
        let set = parse("{x, y}")?;
        let pretty = PrettyFormatter.format(&set, &FormatConfig::default());
        assert_eq!(pretty, "{x, y}");
        assert_eq!(PrettyFormatter.format(&Multiset::new(), &FormatConfig::default()), "{}");
        Ok(())
    }
}
