use crate::{Element, Multiset};

/// Asserts that two multisets are equal as multisets
///
/// # Panics
///
/// Panics if the multisets are not equal
pub fn assert_multisets_equal(left: &Multiset, right: &Multiset, message: &str) {
    assert!(
        left == right,
        "{}\nLeft: {}\nRight: {}\nLeft canonical: {}\nRight canonical: {}",
        message,
        left,
        right,
        left.canonical_form(),
        right.canonical_form()
    );
}

/// Asserts the multiplicity of each listed atom
///
/// # Panics
///
/// Panics if any count differs
pub fn assert_counts(set: &Multiset, expected: &[(&str, usize)]) {
    for (atom, count) in expected {
        let actual = set.count(&Element::atomic(*atom));
        assert_eq!(
            actual, *count,
            "count of {} in {} was {}, expected {}",
            atom, set, actual, count
        );
    }
}
