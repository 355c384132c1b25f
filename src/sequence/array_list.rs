//! Array-backed list over a contiguous growable store.
//!
//! [`ArrayList`] is the default, general-purpose [`Sequence`].
//!
//! # Complexity
//!
//! - `get` / `set`: O(1)
//! - `append`: amortized O(1); a full store is reallocated and copied
//! - `insert` / `remove`: O(n), trailing elements are shifted
//! - `len` / `is_empty`: O(1)
//!
//! # Growth Policy
//!
//! When an append or insert needs more room than the current capacity, the
//! store grows to `max(2 * capacity, capacity + MINIMUM_GROWTH)` (and never
//! to less than what the operation needs). The store never shrinks on its
//! own; call [`ArrayList::shrink_to_fit`] to release spare capacity.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::{ArrayList, Sequence};
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.append(1).unwrap();
//! list.append(2).unwrap();
//! list.append(3).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert!(list.capacity() >= 6);
//! assert_eq!(list.set(0, 10), Ok(1));
//! assert_eq!(list.to_vec(), vec![10, 2, 3]);
//! ```

use std::fmt;

use super::{Sequence, check_index};
use crate::error::SequenceError;

#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Constants
// =============================================================================

/// Smallest number of slots added when the backing store grows.
pub const MINIMUM_GROWTH: usize = 4;

/// Capacity to grow to when `required` slots are needed and `capacity` are
/// available.
#[inline]
const fn grown_capacity(capacity: usize, required: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    let incremented = capacity.saturating_add(MINIMUM_GROWTH);
    let grown = if doubled > incremented {
        doubled
    } else {
        incremented
    };
    if grown > required { grown } else { required }
}

// =============================================================================
// ArrayList Definition
// =============================================================================

/// An ordered list backed by a contiguous, growable array.
///
/// The list exclusively owns its elements. Values passed in through
/// [`ArrayList::from_slice`] are cloned, values passed through
/// `From<Vec<T>>` are moved, and every export ([`Sequence::to_vec`],
/// [`ArrayList::into_vec`]) is independent of the list afterwards.
///
/// # Examples
///
/// ```rust
/// use ordseq::sequence::{ArrayList, Sequence};
///
/// let list: ArrayList<i32> = (1..=5).collect();
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.get(4), Ok(&5));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Creates a new empty list without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::ArrayList;
    ///
    /// let list: ArrayList<String> = ArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with room for at least `hint` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows `isize::MAX` bytes, like
    /// [`Vec::with_capacity`].
    #[inline]
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            elements: Vec::with_capacity(hint),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the list can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator that allows modifying each element in place.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Borrows the contents as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the list, returning its elements as a `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }

    /// Ensures room for at least `additional` more elements, growing by the
    /// list's growth policy.
    ///
    /// # Errors
    ///
    /// [`SequenceError::CapacityExhausted`] if the store cannot grow. The
    /// list is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::ArrayList;
    ///
    /// let mut list: ArrayList<u8> = ArrayList::new();
    /// list.reserve(10).unwrap();
    /// assert!(list.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<(), SequenceError> {
        let length = self.elements.len();
        let required = length
            .checked_add(additional)
            .ok_or_else(|| SequenceError::capacity_overflow(length, additional))?;
        self.ensure_capacity(required)
    }

    /// Releases spare capacity.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Removes every element. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn ensure_capacity(&mut self, required: usize) -> Result<(), SequenceError> {
        let capacity = self.elements.capacity();
        if required <= capacity {
            return Ok(());
        }

        let new_capacity = grown_capacity(capacity, required);
        self.elements
            .try_reserve_exact(new_capacity - self.elements.len())
            .map_err(|cause| SequenceError::capacity_exhausted(new_capacity, &cause))?;

        tracing::trace!(
            from = capacity,
            to = self.elements.capacity(),
            "array list backing store grew"
        );
        Ok(())
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a list holding clones of the values in `slice`.
    ///
    /// The list does not alias the caller's storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sequence::ArrayList;
    ///
    /// let source = [1, 2, 3];
    /// let list = ArrayList::from_slice(&source);
    /// assert_eq!(list.as_slice(), &source);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        Self {
            elements: slice.to_vec(),
        }
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<T> Sequence for ArrayList<T> {
    type Element = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        <[T]>::get(&self.elements, index).ok_or(SequenceError::IndexOutOfRange {
            index,
            length: self.elements.len(),
        })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        check_index(index, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[index], value))
    }

    fn append(&mut self, value: T) -> Result<(), SequenceError> {
        self.ensure_capacity(self.elements.len() + 1)?;
        self.elements.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let length = self.elements.len();
        if index > length {
            return Err(SequenceError::IndexOutOfRange { index, length });
        }
        self.ensure_capacity(length + 1)?;
        self.elements.insert(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        check_index(index, self.elements.len())?;
        Ok(self.elements.remove(index))
    }

    #[inline]
    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Extending uses `Vec`'s own amortized growth and panics on allocation
/// failure, since [`Extend`] cannot report errors. Use
/// [`ArrayList::reserve`] first to surface capacity problems as values.
impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: Vec::from(elements),
        }
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    #[inline]
    fn from(list: ArrayList<T>) -> Self {
        list.elements
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> TypeConstructor for ArrayList<T> {
    type Inner = T;
    type WithType<B> = ArrayList<B>;
}

#[cfg(feature = "typeclass")]
impl<T> Functor for ArrayList<T> {
    fn fmap<B, F>(self, function: F) -> ArrayList<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> ArrayList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.elements.iter().map(function).collect()
    }
}

#[cfg(feature = "typeclass")]
impl<T> Foldable for ArrayList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

#[cfg(feature = "typeclass")]
impl<T> Semigroup for ArrayList<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

#[cfg(feature = "typeclass")]
impl<T> Monoid for ArrayList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
