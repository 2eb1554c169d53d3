pub mod config;
pub mod multiset;
pub mod scanner;

pub use config::{ParseMode, ParserConfig};
pub use multiset::MultisetParser;
