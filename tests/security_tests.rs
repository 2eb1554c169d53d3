#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use nestset::test_utils::*;

fn nested_literal(levels: usize) -> String {
    format!("{}x{}", "{".repeat(levels), "}".repeat(levels))
}

#[test]
fn test_max_input_size() {
    // One byte past the 1MB default
    let large_input = format!("{{{}}}", "a".repeat(DEFAULT_MAX_SIZE - 1));

    let result = MultisetParser::new(&large_input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::MaxSizeExceeded {
                max: DEFAULT_MAX_SIZE
            }
        );
        assert!(e.pos().is_none());
    }
}

#[test]
fn test_max_depth_boundary() -> Result<()> {
    let at_limit = parse(&nested_literal(DEFAULT_MAX_DEPTH))?;
    assert_eq!(at_limit.depth(), DEFAULT_MAX_DEPTH);

    let result = parse(&nested_literal(DEFAULT_MAX_DEPTH + 1));
    assert!(
        result.is_err(),
        "Expected error for depth {}, got success",
        DEFAULT_MAX_DEPTH + 1
    );
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::MaxDepthExceeded {
                max: DEFAULT_MAX_DEPTH
            }
        );
    }
    Ok(())
}

#[test]
fn test_stack_overflow_prevention() {
    // Far beyond the limit, both modes must fail cleanly instead of recursing
    let deep = nested_literal(10_000);
    assert!(parse(&deep).is_err());
    assert!(parse_strict(&deep).is_err());

    let unclosed = "{".repeat(10_000);
    assert!(matches!(
        parse_strict(&unclosed).map_err(|e| e.kind().clone()),
        Err(ErrorKind::UnclosedBrace)
    ));
}

#[test]
fn test_custom_depth_limit() {
    let config = ParserConfig::default().with_max_depth(3);
    assert!(parse_with_config("{{{a}}}", config.clone()).is_ok());
    assert!(parse_with_config("{{{{a}}}}", config).is_err());
}

#[test]
fn test_empty_innermost_literal_counts_toward_depth() {
    let config = ParserConfig::default().with_max_depth(2);
    assert!(parse_with_config("{{}}", config.clone()).is_ok());

    let result = parse_with_config("{{{}}}", config);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxDepthExceeded { max: 2 })
    ));

    let levels = DEFAULT_MAX_DEPTH + 1;
    let empty_leaf = format!("{}{}", "{".repeat(levels), "}".repeat(levels));
    assert!(parse(&empty_leaf).is_err());
}

#[test]
fn test_max_token_length() {
    let long_atom = "a".repeat(DEFAULT_MAX_TOKEN_LENGTH + 1);
    let result = parse(&format!("{{{}}}", long_atom));
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxTokenLengthExceeded { .. })
    ));

    let fits = "a".repeat(DEFAULT_MAX_TOKEN_LENGTH);
    assert!(parse(&format!("{{{}}}", fits)).is_ok());
}

#[test]
fn test_max_elements() {
    let items = vec!["a"; DEFAULT_MAX_ELEMENTS + 1].join(",");
    let result = parse(&format!("{{{}}}", items));
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::MaxElementsExceeded {
                max: DEFAULT_MAX_ELEMENTS
            }
        );
        assert!(e.pos().is_some());
    }
}

#[test]
fn test_element_limit_includes_nested_elements() {
    let config = ParserConfig::default().with_max_elements(4);
    assert!(parse_with_config("{a, {b, c}}", config.clone()).is_ok());
    assert!(parse_with_config("{a, {b, c}, d}", config).is_err());
}

#[test]
fn test_limits_apply_in_strict_mode() {
    let config = ParserConfig::strict().with_max_size(8);
    let result = parse_with_config("{a, b, c, d}", config);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxSizeExceeded { max: 8 })
    ));
}

#[test]
fn test_power_set_limit() -> Result<()> {
    let items = vec!["x"; DEFAULT_MAX_POWER_SET_ELEMENTS + 1].join(", ");
    let set = parse(&format!("{{{}}}", items))?;

    let result = power_set(&set);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(
            e.kind(),
            &ErrorKind::PowerSetTooLarge {
                len: DEFAULT_MAX_POWER_SET_ELEMENTS + 1,
                max: DEFAULT_MAX_POWER_SET_ELEMENTS
            }
        );
    }

    let small = parse("{a, b, c}")?;
    assert!(small.power_set_with_limit(2).is_err());
    assert_eq!(small.power_set_with_limit(3)?.len(), 8);
    Ok(())
}

#[test]
fn test_power_set_limit_has_a_ceiling() -> Result<()> {
    let items: Vec<String> = (0..64).map(|i| format!("x{}", i)).collect();
    let set = parse(&format!("{{{}}}", items.join(", ")))?;

    let result = set.power_set_with_limit(usize::MAX);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::PowerSetTooLarge {
            len: 64,
            max: POWER_SET_ELEMENTS_CEILING
        })
    ));
    Ok(())
}
