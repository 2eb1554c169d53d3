// parser/multiset.rs
//! Multiset literal parser.
//!
//! This module turns brace notation into a [`Multiset`] tree:
//! - Items are split on commas at brace depth zero
//! - Items of the form `{ ... }` are parsed recursively as nested multisets
//! - Anything else becomes an atom holding the trimmed text
//!
//! In lenient mode malformed input is recovered from and logged; in strict
//! mode it is reported as an error. Resource limits apply in both modes.

use tracing::{debug, instrument, trace, warn};

use super::config::ParserConfig;
use super::scanner::{self, Segment};
use crate::common::ParserState;
use crate::element::Element;
use crate::error::{Error, ErrorKind, Result};
use crate::multiset::Multiset;

/// Parser for multiset literals
pub struct MultisetParser<'a> {
    /// Full input, kept for error positions
    input: &'a str,
    state: ParserState,
}

impl<'a> MultisetParser<'a> {
    /// Creates a lenient parser with default limits
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Result<Self> {
        let state = ParserState::with_config(config);
        state.validate_input_size(input.len()).map_err(Error::new)?;
        Ok(Self { input, state })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.state.config
    }

    /// Parses the complete input as one multiset literal
    #[instrument(
        level = "debug",
        skip(self),
        fields(len = self.input.len(), mode = %self.state.config.mode)
    )]
    pub fn parse(&mut self) -> Result<Multiset> {
        let leading = self.input.len() - self.input.trim_start().len();
        let set = self.parse_literal(self.input.trim(), leading)?;
        debug!(
            cardinality = set.len(),
            elements = self.state.context.element_count(),
            "parsed multiset"
        );
        Ok(set)
    }

    /// Parses trimmed literal text starting at `offset` of the input
    fn parse_literal(&mut self, text: &'a str, offset: usize) -> Result<Multiset> {
        let (body, body_offset) = self.literal_body(text, offset)?;

        self.state
            .enter_nested()
            .map_err(|kind| self.error(kind, offset))?;
        let result = self.parse_body(body, body_offset);
        self.state.exit_nested();
        result
    }

    /// Strips the outer braces, returning the body and its offset
    fn literal_body(&self, text: &'a str, offset: usize) -> Result<(&'a str, usize)> {
        if !text.starts_with('{') {
            if self.state.is_strict() {
                return Err(self.error(ErrorKind::ExpectedOpeningBrace, offset));
            }
            if !text.is_empty() {
                warn!(offset, "literal does not start with '{{', reading it as a body");
            }
            return Ok((text, offset));
        }

        match scanner::matching_close(text) {
            Some(close) => {
                let body = text.get(1..close).unwrap_or_default();
                let trailing = text.get(close + 1..).unwrap_or_default();
                let content = trailing.trim();
                if !content.is_empty() {
                    let skipped = trailing.len() - trailing.trim_start().len();
                    let trailing_offset = offset + close + 1 + skipped;
                    if self.state.is_strict() {
                        return Err(self.error(
                            ErrorKind::TrailingContent {
                                content: content.to_string(),
                            },
                            trailing_offset,
                        ));
                    }
                    warn!(
                        offset = trailing_offset,
                        content,
                        "ignoring content after closing '}}'"
                    );
                }
                Ok((body, offset + 1))
            }
            None => {
                if self.state.is_strict() {
                    return Err(self.error(ErrorKind::UnclosedBrace, offset));
                }
                warn!(offset, "unclosed '{{', closing it at end of input");
                Ok((text.get(1..).unwrap_or_default(), offset + 1))
            }
        }
    }

    fn parse_body(&mut self, body: &'a str, offset: usize) -> Result<Multiset> {
        let mut set = Multiset::new();
        if body.trim().is_empty() {
            return Ok(set);
        }

        for segment in scanner::split_top_level(body, offset) {
            if segment.is_empty() {
                if self.state.is_strict() {
                    return Err(self.error(ErrorKind::EmptyItem, segment.offset));
                }
                trace!(offset = segment.offset, "dropping empty item");
                continue;
            }

            let element = self.parse_item(segment)?;
            self.state
                .add_element()
                .map_err(|kind| self.error(kind, segment.offset))?;
            set.insert(element);
        }

        Ok(set)
    }

    fn parse_item(&mut self, segment: Segment<'a>) -> Result<Element> {
        if segment.is_literal() {
            return self
                .parse_literal(segment.text, segment.offset)
                .map(Element::Nested);
        }

        if segment.has_brace() && self.state.is_strict() {
            return Err(self.error(
                ErrorKind::InvalidToken {
                    token: segment.text.to_string(),
                },
                segment.offset,
            ));
        }

        self.state
            .validate_token(segment.text)
            .map_err(|kind| self.error(kind, segment.offset))?;
        Ok(Element::atomic(segment.text))
    }

    fn error(&self, kind: ErrorKind, offset: usize) -> Error {
        Error::at(kind, self.input, offset)
    }
}
