//! nestset: a parser and algebra engine for nested multisets
//!
//! This crate provides functionality to:
//! - Parse brace notation such as `{a, a, {b, c}, {}}` into a multiset tree
//! - Count, compare and hash multisets independently of element order
//! - Combine multisets with union, intersection, difference and power set
//! - Print multisets back as compact, pretty or canonical text
//!
//! # Examples
//! ```
//! use nestset::{parse, Element, Result};
//!
//! fn example() -> Result<()> {
//!     let a = parse("{alpha, alpha, beta, gamma}")?;
//!     let b = parse("{alpha, beta, beta, delta}")?;
//!
//!     let union = a.union_with(&b);
//!     assert_eq!(union.len(), 8);
//!     assert_eq!(union.count(&Element::atomic("alpha")), 3);
//!
//!     assert_eq!(a.difference_with(&b), parse("{gamma, alpha}")?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod algebra;
pub mod common;
pub mod element;
pub mod error;
pub mod formatter;
pub mod multiset;
pub mod parser;
#[doc(hidden)]
pub mod test_utils;

// Re-exports
pub use element::Element;
pub use error::{Error, ErrorKind, Pos, Result};
pub use formatter::{CompactFormatter, FormatConfig, Formatter, PrettyFormatter};
pub use multiset::Multiset;
pub use parser::{MultisetParser, ParseMode, ParserConfig};

use tracing::instrument;

/// Parses a multiset literal, recovering from malformed input
#[instrument(level = "debug", skip(text))]
pub fn parse(text: &str) -> Result<Multiset> {
    MultisetParser::new(text)?.parse()
}

/// Parses a multiset literal, rejecting malformed input
pub fn parse_strict(text: &str) -> Result<Multiset> {
    parse_with_config(text, ParserConfig::strict())
}

pub fn parse_with_config(text: &str, config: ParserConfig) -> Result<Multiset> {
    MultisetParser::with_config(text, config)?.parse()
}

/// Brace notation with elements in their current order
pub fn render(set: &Multiset) -> String {
    set.to_string()
}

pub fn render_with(set: &Multiset, config: &FormatConfig) -> String {
    CompactFormatter.format(set, config)
}

pub fn cardinality(set: &Multiset) -> usize {
    set.len()
}

pub fn distinct_count(set: &Multiset) -> usize {
    set.distinct_count()
}

pub fn is_empty(set: &Multiset) -> bool {
    set.is_empty()
}

pub fn count(set: &Multiset, element: &Element) -> usize {
    set.count(element)
}

pub fn contains(set: &Multiset, element: &Element) -> bool {
    set.contains(element)
}

pub fn union_with(left: &Multiset, right: &Multiset) -> Multiset {
    left.union_with(right)
}

pub fn intersection_with(left: &Multiset, right: &Multiset) -> Multiset {
    left.intersection_with(right)
}

pub fn difference_with(left: &Multiset, right: &Multiset) -> Multiset {
    left.difference_with(right)
}

/// Multiset equality: same values with the same multiplicities
pub fn equals(left: &Multiset, right: &Multiset) -> bool {
    left == right
}

pub fn power_set(set: &Multiset) -> Result<Multiset> {
    set.power_set()
}

pub fn atomic(text: impl Into<String>) -> Element {
    Element::atomic(text)
}

pub fn nested(set: Multiset) -> Element {
    Element::nested(set)
}
