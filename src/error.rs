//! Error handling types for the engine
//!
//! Parsing is the only fallible boundary of the engine; the algebra is total
//! apart from the power-set size limit. Errors carry the position in the
//! source text where the problem was detected.

use std::{error, fmt};
use thiserror::Error as ThisError;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }

    /// Resolves a byte offset into a line/column position within `input`
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut line = 1u32;
        let mut col = 1u32;
        for (idx, c) in input.char_indices() {
            if idx >= offset {
                break;
            }
            if c == '\n' {
                line = line.saturating_add(1);
                col = 1;
            } else {
                col = col.saturating_add(1);
            }
        }
        Self::new(offset, line, col)
    }
}

/// Error kind for detailed categorization
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A multiset literal must open with `{`
    #[error("expected '{{' to open a multiset literal")]
    ExpectedOpeningBrace,
    /// A `{` was never closed
    #[error("unclosed '{{'")]
    UnclosedBrace,
    /// Something follows the brace that closes the literal
    #[error("unexpected content after closing '}}': {content}")]
    TrailingContent { content: String },
    /// Nothing between two separators, or a dangling separator
    #[error("empty item in multiset literal")]
    EmptyItem,
    /// An atom contains characters reserved by the notation
    #[error("invalid token: {token}")]
    InvalidToken { token: String },
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
    #[error("max token length exceeded: {max}")]
    MaxTokenLengthExceeded { max: usize },
    #[error("max element count exceeded: {max}")]
    MaxElementsExceeded { max: usize },
    /// The power set would hold more than 2^max subsets
    #[error("power set of {len} elements exceeds the limit of {max} elements")]
    PowerSetTooLarge { len: usize, max: usize },
}

/// Main error type for the engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Pos>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, pos: None }
    }

    /// Create error at a byte offset of `input`
    pub fn at(kind: ErrorKind, input: &str, offset: usize) -> Self {
        Self {
            kind,
            pos: Some(Pos::locate(input, offset)),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "error at {}: {}", pos, self.kind),
            None => write!(f, "error: {}", self.kind),
        }
    }
}

impl error::Error for Error {}

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, Error>;
