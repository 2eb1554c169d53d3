mod comparison;
mod fixtures;
mod helpers;

pub use comparison::{assert_counts, assert_multisets_equal};
pub use fixtures::{EQUIVALENT_LITERALS, MALFORMED_LITERALS, VALID_LITERALS};
pub use helpers::{ms, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    atomic, cardinality, contains, count, difference_with, distinct_count, equals,
    error::{Error, ErrorKind, Pos, Result},
    formatter::{CompactFormatter, FormatConfig, Formatter, PrettyFormatter},
    intersection_with, is_empty, nested, parse,
    parser::{
        config::{
            ParseMode, ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS,
            DEFAULT_MAX_POWER_SET_ELEMENTS, DEFAULT_MAX_SIZE, DEFAULT_MAX_TOKEN_LENGTH,
            POWER_SET_ELEMENTS_CEILING,
        },
        MultisetParser,
    },
    parse_strict, parse_with_config, power_set, render, render_with, union_with, Element,
    Multiset,
};
