//! Elements stored inside a multiset.
//!
//! An element is either an atomic text value or a nested multiset. Elements
//! compare structurally: atoms by their text, nested multisets by multiset
//! equality (order-independent, multiplicity-aware).

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::multiset::Multiset;

/// A value held by a [`Multiset`]
#[derive(Debug, Clone)]
pub enum Element {
    /// Immutable text value
    Atomic(String),
    /// Exclusively owned nested multiset
    Nested(Multiset),
}

impl Element {
    pub fn atomic(text: impl Into<String>) -> Self {
        Self::Atomic(text.into())
    }

    pub fn nested(set: Multiset) -> Self {
        Self::Nested(set)
    }

    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    pub fn as_atomic(&self) -> Option<&str> {
        match self {
            Self::Atomic(text) => Some(text),
            Self::Nested(_) => None,
        }
    }

    pub const fn as_nested(&self) -> Option<&Multiset> {
        match self {
            Self::Atomic(_) => None,
            Self::Nested(set) => Some(set),
        }
    }

    pub fn into_nested(self) -> Option<Multiset> {
        match self {
            Self::Atomic(_) => None,
            Self::Nested(set) => Some(set),
        }
    }

    /// Text used to order and hash this element.
    ///
    /// Atoms use their raw text; nested multisets use their canonical
    /// (recursively sorted) notation.
    pub fn canonical_form(&self) -> String {
        match self {
            Self::Atomic(text) => text.clone(),
            Self::Nested(set) => set.canonical_form(),
        }
    }

    pub fn ordering_key(&self) -> (bool, String) {
        (self.is_collection(), self.canonical_form())
    }

    pub fn comes_before(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Hash consistent with structural equality, as an integer
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atomic(l), Self::Atomic(r)) => l == r,
            (Self::Nested(l), Self::Nested(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for Element {}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Atomic(l), Self::Atomic(r)) => l.cmp(r),
            (Self::Atomic(_), Self::Nested(_)) => Ordering::Less,
            (Self::Nested(_), Self::Atomic(_)) => Ordering::Greater,
            // Distinct structures can share canonical text when atoms carry
            // delimiters, so fall back to the sorted contents on a tie.
            (Self::Nested(l), Self::Nested(r)) => l
                .canonical_form()
                .cmp(&r.canonical_form())
                .then_with(|| l.sorted().cmp(&r.sorted())),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_collection().hash(state);
        self.canonical_form().hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(text) => f.write_str(text),
            Self::Nested(set) => write!(f, "{}", set),
        }
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Atomic(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Atomic(text)
    }
}

impl From<Multiset> for Element {
    fn from(set: Multiset) -> Self {
        Self::Nested(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(items: &[&str]) -> Element {
        Element::nested(items.iter().copied().map(Element::from).collect())
    }

    #[test]
    fn test_atomic_equality_is_exact() {
        assert_eq!(Element::atomic("alpha"), Element::atomic("alpha"));
        assert_ne!(Element::atomic("alpha"), Element::atomic("Alpha"));
        assert_ne!(Element::atomic("alpha"), Element::atomic("alpha "));
    }

    #[test]
    fn test_cross_kind_never_equal() {
        let atom = Element::atomic("{}");
        let empty = Element::nested(Multiset::new());
        assert_ne!(atom, empty);
        assert_ne!(empty, atom);
    }

    #[test]
    fn test_nested_equality_ignores_order() {
        assert_eq!(nested(&["b", "c"]), nested(&["c", "b"]));
        assert_ne!(nested(&["b", "c"]), nested(&["b", "c", "c"]));
    }

    #[test]
    fn test_atoms_order_before_collections() {
        let atom = Element::atomic("zzz");
        let set = nested(&["a"]);
        assert!(atom.comes_before(&set));
        assert!(!set.comes_before(&atom));
        assert!(Element::atomic("a").comes_before(&Element::atomic("b")));
    }

    #[test]
    fn test_collections_order_by_canonical_text() {
        // "{b, c}" sorts before "{b, d}" regardless of insertion order
        assert!(nested(&["c", "b"]).comes_before(&nested(&["b", "d"])));
        assert_eq!(nested(&["c", "b"]).cmp(&nested(&["b", "c"])), Ordering::Equal);
    }

    #[test]
    fn test_ordering_breaks_canonical_text_ties() {
        let joined = nested(&["a, b"]);
        let split = nested(&["a", "b"]);
        assert_eq!(joined.canonical_form(), split.canonical_form());
        assert_ne!(joined, split);
        assert_ne!(joined.cmp(&split), Ordering::Equal);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        assert_eq!(
            nested(&["x", "y", "x"]).fingerprint(),
            nested(&["y", "x", "x"]).fingerprint()
        );
        assert_ne!(
            Element::atomic("{}").fingerprint(),
            Element::nested(Multiset::new()).fingerprint()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Element::atomic("alpha").to_string(), "alpha");
        assert_eq!(nested(&["b", "a"]).to_string(), "{b, a}");
        assert_eq!(Element::nested(Multiset::new()).to_string(), "{}");
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Element::nested(
            vec![Element::atomic("a"), nested(&["b"])]
                .into_iter()
                .collect(),
        );
        let mut copy = original.clone();
        if let Element::Nested(set) = &mut copy {
            set.insert(Element::atomic("c"));
        }
        assert_eq!(original.to_string(), "{a, {b}}");
        assert_eq!(copy.to_string(), "{a, {b}, c}");
    }
}
