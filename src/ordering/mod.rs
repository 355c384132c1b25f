//! Structural equality and stable ordering over sequences.
//!
//! - [`structurally_equal`] compares any two sequences with the same element
//!   type, regardless of which implementation holds them.
//! - [`sort_by`], [`sort`] and [`sort_by_key`] return a new, stably sorted
//!   [`ArrayList`]; the input is left as it was.
//! - [`is_sorted_by`] checks an order without building anything.
//!
//! [`Ordered`] exposes the same operations as methods.
//!
//! # Stability
//!
//! Elements that compare equal keep their original relative order. This is
//! part of the contract and is tested on its own, independent of the
//! underlying algorithm.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::ordering::{sort_by_key, structurally_equal};
//! use ordseq::sequence::ArrayList;
//!
//! let people = ArrayList::from(vec![("eve", 31), ("bob", 25), ("amy", 31), ("dan", 25)]);
//! let by_age = sort_by_key(&people, |person| person.1);
//!
//! let expected = vec![("bob", 25), ("dan", 25), ("eve", 31), ("amy", 31)];
//! assert!(structurally_equal(&by_age, &expected));
//! ```

use std::cmp::Ordering;

use crate::sequence::{ArrayList, Sequence};

// =============================================================================
// Equality
// =============================================================================

/// Returns `true` if both sequences have the same length and equal elements
/// at every index.
///
/// # Examples
///
/// ```rust
/// use ordseq::ordering::structurally_equal;
/// use ordseq::sequence::ArrayList;
///
/// let list = ArrayList::from(vec![1, 2, 3]);
/// assert!(structurally_equal(&list, &vec![1, 2, 3]));
/// assert!(!structurally_equal(&list, &vec![1, 2]));
/// ```
pub fn structurally_equal<A, B>(left: &A, right: &B) -> bool
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    A::Element: PartialEq,
{
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| a == b)
}

// =============================================================================
// Sorting
// =============================================================================

/// Returns a new list with the elements ordered by `comparator`.
///
/// The sort is stable: elements for which `comparator` returns
/// [`Ordering::Equal`] stay in their original relative order.
///
/// # Examples
///
/// ```rust
/// use ordseq::ordering::sort_by;
///
/// let words = vec!["pear", "fig", "kiwi", "plum"];
/// let sorted = sort_by(&words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(sorted.as_slice(), &["fig", "pear", "kiwi", "plum"]);
/// ```
#[must_use]
pub fn sort_by<S, F>(sequence: &S, comparator: F) -> ArrayList<S::Element>
where
    S: Sequence,
    S::Element: Clone,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    let mut elements = sequence.to_vec();
    elements.sort_by(comparator);
    ArrayList::from(elements)
}

/// Returns a new list in ascending order.
#[must_use]
pub fn sort<S>(sequence: &S) -> ArrayList<S::Element>
where
    S: Sequence,
    S::Element: Clone + Ord,
{
    sort_by(sequence, Ord::cmp)
}

/// Returns a new list ordered by the key extracted with `key`.
#[must_use]
pub fn sort_by_key<S, K, F>(sequence: &S, mut key: F) -> ArrayList<S::Element>
where
    S: Sequence,
    S::Element: Clone,
    K: Ord,
    F: FnMut(&S::Element) -> K,
{
    sort_by(sequence, |a, b| key(a).cmp(&key(b)))
}

/// Returns `true` if no adjacent pair is in descending order under
/// `comparator`.
pub fn is_sorted_by<S, F>(sequence: &S, mut comparator: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    let mut elements = sequence.iter();
    let Some(mut previous) = elements.next() else {
        return true;
    };
    for current in elements {
        if comparator(previous, current) == Ordering::Greater {
            return false;
        }
        previous = current;
    }
    true
}

// =============================================================================
// Method Form
// =============================================================================

/// Ordering utilities as methods on every [`Sequence`].
///
/// Method names describe the returned value (`sorted`, not `sort`) so they
/// never shadow the in-place slice methods on `Vec`.
///
/// # Examples
///
/// ```rust
/// use ordseq::ordering::Ordered;
/// use ordseq::sequence::ArrayList;
///
/// let list = ArrayList::from(vec![3, 1, 2]);
/// let sorted = list.sorted();
/// assert!(sorted.is_ordered_by(Ord::cmp));
/// assert!(sorted.structurally_equals(&vec![1, 2, 3]));
/// assert_eq!(list.as_slice(), &[3, 1, 2]);
/// ```
pub trait Ordered: Sequence {
    /// See [`structurally_equal`].
    fn structurally_equals<B>(&self, other: &B) -> bool
    where
        B: Sequence<Element = Self::Element>,
        Self::Element: PartialEq;

    /// See [`sort_by`].
    #[must_use]
    fn sorted_by<F>(&self, comparator: F) -> ArrayList<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;

    /// See [`sort`].
    #[must_use]
    fn sorted(&self) -> ArrayList<Self::Element>
    where
        Self::Element: Clone + Ord;

    /// See [`sort_by_key`].
    #[must_use]
    fn sorted_by_key<K, F>(&self, key: F) -> ArrayList<Self::Element>
    where
        Self::Element: Clone,
        K: Ord,
        F: FnMut(&Self::Element) -> K;

    /// See [`is_sorted_by`].
    fn is_ordered_by<F>(&self, comparator: F) -> bool
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;
}

impl<S: Sequence> Ordered for S {
    #[inline]
    fn structurally_equals<B>(&self, other: &B) -> bool
    where
        B: Sequence<Element = S::Element>,
        S::Element: PartialEq,
    {
        structurally_equal(self, other)
    }

    #[inline]
    fn sorted_by<F>(&self, comparator: F) -> ArrayList<S::Element>
    where
        S::Element: Clone,
        F: FnMut(&S::Element, &S::Element) -> Ordering,
    {
        sort_by(self, comparator)
    }

    #[inline]
    fn sorted(&self) -> ArrayList<S::Element>
    where
        S::Element: Clone + Ord,
    {
        sort(self)
    }

    #[inline]
    fn sorted_by_key<K, F>(&self, key: F) -> ArrayList<S::Element>
    where
        S::Element: Clone,
        K: Ord,
        F: FnMut(&S::Element) -> K,
    {
        sort_by_key(self, key)
    }

    #[inline]
    fn is_ordered_by<F>(&self, comparator: F) -> bool
    where
        F: FnMut(&S::Element, &S::Element) -> Ordering,
    {
        is_sorted_by(self, comparator)
    }
}
