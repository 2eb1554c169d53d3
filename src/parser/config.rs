use std::fmt;

use crate::error::ErrorKind;

/// Maximum nesting depth (64); deeper literals are rejected before recursing
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Maximum input size (1MB) to prevent memory exhaustion attacks
pub const DEFAULT_MAX_SIZE: usize = 1_048_576; // 1MB
/// Maximum atom length (100KB)
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 102_400; // 100KB
/// Maximum number of elements across all nesting levels
pub const DEFAULT_MAX_ELEMENTS: usize = 100_000;
/// Largest multiset whose power set is generated by default (2^20 subsets)
pub const DEFAULT_MAX_POWER_SET_ELEMENTS: usize = 20;
/// Upper bound on any power-set limit, whatever the caller asks for
pub const POWER_SET_ELEMENTS_CEILING: usize = 32;

/// How the parser treats malformed literals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Recover from malformed input and keep whatever can be read
    #[default]
    Lenient,
    /// Reject malformed input with an error
    Strict,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Recovery behaviour for malformed input
    pub mode: ParseMode,
    /// Maximum nesting depth of multiset literals
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum length of a single atom in bytes
    pub max_token_length: usize,
    /// Maximum number of elements in the whole tree
    pub max_elements: usize,
}

/// Tracks nesting depth and element count during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    pub current_depth: usize,
    element_count: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ mode: {}, max_depth: {}, max_size: {}, max_token_length: {}, max_elements: {} }}",
            self.mode, self.max_depth, self.max_size, self.max_token_length, self.max_elements
        )
    }
}

impl ParserConfig {
    /// Default limits with strict validation
    pub fn strict() -> Self {
        Self::default().with_mode(ParseMode::Strict)
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }

    pub fn validate_token(&self, token: &str) -> Result<(), ErrorKind> {
        if token.len() > self.max_token_length {
            return Err(ErrorKind::MaxTokenLengthExceeded {
                max: self.max_token_length,
            });
        }
        Ok(())
    }

    pub fn validate_input_size(&self, size: usize) -> Result<(), ErrorKind> {
        if size > self.max_size {
            return Err(ErrorKind::MaxSizeExceeded { max: self.max_size });
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<(), ErrorKind> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ErrorKind::MaxDepthExceeded {
                max: config.max_depth,
            });
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub fn add_element(&mut self, config: &ParserConfig) -> Result<(), ErrorKind> {
        self.element_count += 1;
        if self.element_count > config.max_elements {
            return Err(ErrorKind::MaxElementsExceeded {
                max: config.max_elements,
            });
        }
        Ok(())
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }
}
