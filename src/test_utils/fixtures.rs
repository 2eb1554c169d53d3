/// Well-formed literals with their cardinality and distinct count
pub const VALID_LITERALS: [(&str, usize, usize); 7] = [
    ("{}", 0, 0),
    ("{ }", 0, 0),
    ("{alpha}", 1, 1),
    ("{alpha, alpha, beta, gamma}", 4, 3),
    ("{a, {b, c}, {}}", 3, 3),
    ("{{}, {}, {{}}}", 3, 2),
    ("{x, {y, {z, {}}}, x}", 3, 2),
];

/// Pairs of literals that describe the same multiset
pub const EQUIVALENT_LITERALS: [(&str, &str); 6] = [
    ("{a, b, c}", "{c, b, a}"),
    ("{}", "{ }"),
    ("{a, {b, c}, {}}", "{{}, {c, b}, a}"),
    ("{, a, b}", "{a, b}"),
    ("{a,b,a}", "{ a , a , b }"),
    ("{{a, {b, c}}, d}", "{d, {{c, b}, a}}"),
];

/// Malformed literals accepted in lenient mode and rejected in strict mode
pub const MALFORMED_LITERALS: [(&str, &str); 6] = [
    ("a, b", "Missing braces"),
    ("{a, b", "Unclosed brace"),
    ("{a, b} c", "Trailing content"),
    ("{a, , b}", "Empty item"),
    ("{a, b,}", "Trailing comma"),
    ("{a, x{y}}", "Brace inside atom"),
];
