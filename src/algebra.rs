//! Multiset algebra.
//!
//! The pure operations always return a freshly owned multiset built from
//! clones; operands are never modified. The mutating operations reassign the
//! receiver to the result of the matching pure operation.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use tracing::{debug, instrument};

use crate::element::Element;
use crate::error::{ErrorKind, Result};
use crate::multiset::Multiset;
use crate::parser::config::{DEFAULT_MAX_POWER_SET_ELEMENTS, POWER_SET_ELEMENTS_CEILING};

impl Multiset {
    /// Every element of `self` followed by every element of `other`
    pub fn union_with(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend(self.iter().cloned());
        elements.extend(other.iter().cloned());
        Self::from_elements(elements)
    }

    /// Elements of `self` matched one-for-one against elements of `other`.
    ///
    /// Each value keeps `min(count in self, count in other)` occurrences, in
    /// the order they appear in `self`.
    pub fn intersection_with(&self, other: &Self) -> Self {
        let mut remaining: Vec<&Element> = other.iter().collect();
        let mut result = Self::new();
        for element in self {
            if let Some(idx) = remaining.iter().position(|candidate| *candidate == element) {
                remaining.remove(idx);
                result.insert(element.clone());
            }
        }
        result
    }

    /// `self` with one occurrence removed per element of `other`.
    ///
    /// Each value keeps `max(0, count in self - count in other)` occurrences.
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            result.remove_one(element);
        }
        result
    }

    /// Whether no value occurs more often in `self` than in `other`
    pub fn is_submultiset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.difference_with(other).is_empty()
    }

    /// All 2^n subsets of the elements, taken positionally.
    ///
    /// Subset `k` holds element `i` when bit `i` of `k` is set, so the empty
    /// subset comes first. Duplicates are not merged beforehand.
    ///
    /// Fails with [`ErrorKind::PowerSetTooLarge`] when the multiset holds more
    /// than [`DEFAULT_MAX_POWER_SET_ELEMENTS`] elements; that is the only failure.
    pub fn power_set(&self) -> Result<Self> {
        self.power_set_with_limit(DEFAULT_MAX_POWER_SET_ELEMENTS)
    }

    /// Power set with a caller-chosen element limit.
    ///
    /// The limit is clamped to [`POWER_SET_ELEMENTS_CEILING`], and a failed
    /// reservation for the subsets is reported instead of aborting.
    #[instrument(level = "debug", skip(self), fields(len = self.len()))]
    pub fn power_set_with_limit(&self, max_elements: usize) -> Result<Self> {
        let len = self.len();
        let max = max_elements.min(POWER_SET_ELEMENTS_CEILING);
        let too_large = || ErrorKind::PowerSetTooLarge { len, max };
        if len > max {
            return Err(too_large().into());
        }
        let total = u32::try_from(len)
            .ok()
            .and_then(|bits| 1usize.checked_shl(bits))
            .ok_or_else(too_large)?;

        let mut subsets = Vec::new();
        subsets.try_reserve_exact(total).map_err(|_| too_large())?;
        for mask in 0..total {
            let subset: Self = self
                .iter()
                .enumerate()
                .filter(|(bit, _)| (mask >> bit) & 1 == 1)
                .map(|(_, element)| element.clone())
                .collect();
            subsets.push(Element::Nested(subset));
        }
        debug!(subsets = total, "generated power set");
        Ok(Self::from_elements(subsets))
    }

    pub fn add_all(&mut self, other: &Self) {
        *self = self.union_with(other);
    }

    pub fn keep_common(&mut self, other: &Self) {
        *self = self.intersection_with(other);
    }

    pub fn remove(&mut self, other: &Self) {
        *self = self.difference_with(other);
    }
}

impl Add<&Multiset> for &Multiset {
    type Output = Multiset;

    fn add(self, rhs: &Multiset) -> Multiset {
        self.union_with(rhs)
    }
}

impl Add for Multiset {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.extend(rhs);
        self
    }
}

impl Mul<&Multiset> for &Multiset {
    type Output = Multiset;

    fn mul(self, rhs: &Multiset) -> Multiset {
        self.intersection_with(rhs)
    }
}

impl Sub<&Multiset> for &Multiset {
    type Output = Multiset;

    fn sub(self, rhs: &Multiset) -> Multiset {
        self.difference_with(rhs)
    }
}

impl AddAssign<&Multiset> for Multiset {
    fn add_assign(&mut self, rhs: &Multiset) {
        self.add_all(rhs);
    }
}

impl MulAssign<&Multiset> for Multiset {
    fn mul_assign(&mut self, rhs: &Multiset) {
        self.keep_common(rhs);
    }
}

impl SubAssign<&Multiset> for Multiset {
    fn sub_assign(&mut self, rhs: &Multiset) {
        self.remove(rhs);
    }
}
