//! The multiset container.
//!
//! A [`Multiset`] is an unordered collection that permits duplicates. Elements
//! are kept in insertion order so iteration and printing stay stable, but that
//! order carries no meaning: equality sorts both sides into canonical order
//! before comparing.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;
use std::str::FromStr;

use crate::element::Element;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Multiset {
    elements: Vec<Element>,
}

impl Multiset {
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Adds one occurrence of `element`
    pub fn insert(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Removes the first element structurally equal to `element`.
    ///
    /// Returns `false` when no such element exists.
    pub fn remove_one(&mut self, element: &Element) -> bool {
        match self.position(element) {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every occurrence of `element`, returning how many were removed
    pub fn remove_all(&mut self, element: &Element) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| e != element);
        before - self.elements.len()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn position(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    /// Cardinality, counting multiplicities
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of equivalence classes under structural equality
    pub fn distinct_count(&self) -> usize {
        let mut sorted = self.sorted();
        sorted.dedup();
        sorted.len()
    }

    pub fn count(&self, element: &Element) -> usize {
        self.elements.iter().filter(|e| *e == element).count()
    }

    pub fn contains(&self, element: &Element) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Distinct values paired with their multiplicities, in canonical order
    pub fn multiplicities(&self) -> Vec<(&Element, usize)> {
        let mut counts: Vec<(&Element, usize)> = Vec::new();
        for element in self.sorted() {
            if let Some((last, count)) = counts.last_mut() {
                if *last == element {
                    *count += 1;
                    continue;
                }
            }
            counts.push((element, 1));
        }
        counts
    }

    /// Nesting depth; a multiset holding no nested multisets has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .elements
            .iter()
            .filter_map(Element::as_nested)
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Element references in canonical order
    pub fn sorted(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort();
        sorted
    }

    /// Brace notation with every level sorted into canonical order.
    ///
    /// Equal multisets always share the same canonical form.
    pub fn canonical_form(&self) -> String {
        let mut keys: Vec<(bool, String)> =
            self.elements.iter().map(Element::ordering_key).collect();
        keys.sort();
        let items: Vec<String> = keys.into_iter().map(|(_, key)| key).collect();
        format!("{{{}}}", items.join(", "))
    }

    /// Hash consistent with multiset equality, as an integer
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Multiset {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.sorted()
            .into_iter()
            .zip(other.sorted())
            .all(|(l, r)| l == r)
    }
}

impl Eq for Multiset {}

impl Hash for Multiset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl fmt::Display for Multiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for Multiset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl From<Vec<Element>> for Multiset {
    fn from(elements: Vec<Element>) -> Self {
        Self::from_elements(elements)
    }
}

impl FromIterator<Element> for Multiset {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for Multiset {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl IntoIterator for Multiset {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Multiset {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
