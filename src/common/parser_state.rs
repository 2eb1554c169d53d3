use crate::error::ErrorKind;
use crate::parser::config::{ParserConfig, ParsingContext};

/// Parser configuration together with the running counters it is checked against
#[derive(Debug, Default)]
pub struct ParserState {
    pub config: ParserConfig,
    pub context: ParsingContext,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            context: ParsingContext::new(),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.config.is_strict()
    }

    pub fn enter_nested(&mut self) -> Result<(), ErrorKind> {
        self.context.enter_nested(&self.config)
    }

    pub fn exit_nested(&mut self) {
        self.context.exit_nested()
    }

    pub fn add_element(&mut self) -> Result<(), ErrorKind> {
        self.context.add_element(&self.config)
    }

    pub fn validate_token(&self, token: &str) -> Result<(), ErrorKind> {
        self.config.validate_token(token)
    }

    pub fn validate_input_size(&self, size: usize) -> Result<(), ErrorKind> {
        self.config.validate_input_size(size)
    }
}
