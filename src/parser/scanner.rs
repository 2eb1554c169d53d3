//! Brace-depth scanning over multiset literal text.
//!
//! Braces and commas are ASCII, so scanning works on byte offsets taken from
//! `char_indices` and slices never split a character.

/// One top-level item of a literal body, trimmed of surrounding whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Byte offset of the first non-whitespace character in the full input
    pub offset: usize,
}

impl<'a> Segment<'a> {
    fn new(raw: &'a str, offset: usize) -> Self {
        let leading = raw.len() - raw.trim_start().len();
        Self {
            text: raw.trim(),
            offset: offset + leading,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the segment reads as a nested literal: `{` ... `}`
    pub fn is_literal(&self) -> bool {
        self.text.starts_with('{') && self.text.ends_with('}')
    }

    pub fn has_brace(&self) -> bool {
        self.text.contains(['{', '}'])
    }
}

/// Byte index of the brace that closes the `{` at the start of `text`
pub(crate) fn matching_close(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits `body` on commas at brace depth zero.
///
/// `base` is the offset of `body` within the full input. Empty segments are
/// returned as well so the caller decides whether to drop or reject them.
pub(crate) fn split_top_level(body: &str, base: usize) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let raw = body.get(start..idx).unwrap_or_default();
                segments.push(Segment::new(raw, base + start));
                start = idx + 1;
            }
            _ => {}
        }
    }

    let rest = body.get(start..).unwrap_or_default();
    segments.push(Segment::new(rest, base + start));
    segments
}
