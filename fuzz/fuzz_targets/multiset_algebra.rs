#![no_main]
use libfuzzer_sys::fuzz_target;
use nestset::parse;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (left, right) = s.split_once('|').unwrap_or((s, "{}"));
    let (Ok(a), Ok(b)) = (parse(left), parse(right)) else {
        return;
    };

    let union = a.union_with(&b);
    let common = a.intersection_with(&b);
    let diff = a.difference_with(&b);

    assert_eq!(union.len(), a.len() + b.len());
    assert!(common.is_submultiset_of(&a));
    assert!(common.is_submultiset_of(&b));
    assert_eq!(diff.union_with(&common), a);
    assert_eq!(a == b, a.canonical_form() == b.canonical_form() && a.sorted() == b.sorted());
});
