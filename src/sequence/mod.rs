//! The sequence contract and its array-backed implementation.
//!
//! [`Sequence`] is the minimal set of operations every ordered collection in
//! this crate supports. The combinators in [`crate::combinator`] and the
//! utilities in [`crate::ordering`] are written against this trait only, so
//! they work unchanged for [`ArrayList`] and for `Vec<T>`.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::{ArrayList, Sequence};
//!
//! let mut list = ArrayList::new();
//! list.append("alpha").unwrap();
//! list.append("gamma").unwrap();
//! list.insert(1, "beta").unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&"beta"));
//! assert_eq!(list.remove(0), Ok("alpha"));
//! assert_eq!(list.to_vec(), vec!["beta", "gamma"]);
//! ```

mod array_list;

pub use array_list::{ArrayList, MINIMUM_GROWTH};

use crate::error::SequenceError;

/// An ordered, insertion-order-preserving collection of elements of one type,
/// addressable by a zero-based index.
///
/// # Contract
///
/// - `len()` is always the number of stored elements.
/// - `get`, `set` and `remove` accept `0 <= index < len()` and return
///   [`SequenceError::IndexOutOfRange`] otherwise. `insert` additionally
///   accepts `index == len()`.
/// - A failed operation leaves the sequence unchanged.
/// - `iter()` yields elements in index order.
/// - A sequence exclusively owns its elements; [`Sequence::to_vec`] returns
///   an independent copy.
///
/// Mutating one instance from several threads requires external
/// synchronisation, which the borrow checker already enforces for safe code.
///
/// # Method resolution on `Vec`
///
/// `Vec<T>` implements this trait, and `Vec` has no inherent `get`,
/// `first`, `last` or `iter`: those live on the slice. With the trait in
/// scope (for example through `ordseq::prelude::*`), `vec.get(i)` therefore
/// resolves to [`Sequence::get`] and returns a `Result`. Go through the
/// slice to get the `Option`-returning lookup.
///
/// ```rust
/// use ordseq::prelude::*;
///
/// let values = vec![10, 20, 30];
/// assert_eq!(values.get(1), Ok(&20));
/// assert_eq!(values.as_slice().get(1), Some(&20));
/// assert_eq!(<[i32]>::get(&values, 3), None);
/// ```
pub trait Sequence {
    /// The element type, fixed for the lifetime of the sequence.
    type Element;

    /// Borrowing iterator over the elements in index order.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the number of elements. O(1).
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&Self::Element, SequenceError>;

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    fn set(&mut self, index: usize, value: Self::Element) -> Result<Self::Element, SequenceError>;

    /// Adds `value` at the end.
    ///
    /// # Errors
    ///
    /// [`SequenceError::CapacityExhausted`] if the backing store cannot grow.
    fn append(&mut self, value: Self::Element) -> Result<(), SequenceError>;

    /// Inserts `value` at `index`, shifting every later element up by one.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfRange`] if `index > len()`, or
    /// [`SequenceError::CapacityExhausted`] if the backing store cannot grow.
    fn insert(&mut self, index: usize, value: Self::Element) -> Result<(), SequenceError>;

    /// Removes and returns the element at `index`, shifting every later
    /// element down by one.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<Self::Element, SequenceError>;

    /// Returns an iterator over the elements in index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first element, if any.
    #[inline]
    fn first(&self) -> Option<&Self::Element> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    #[inline]
    fn last(&self) -> Option<&Self::Element> {
        self.len()
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }

    /// Returns an ordered snapshot of the contents.
    ///
    /// The returned `Vec` shares nothing with the sequence: mutating one
    /// never affects the other.
    fn to_vec(&self) -> Vec<Self::Element>
    where
        Self::Element: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Checks `index < length`.
#[inline]
pub(crate) const fn check_index(index: usize, length: usize) -> Result<(), SequenceError> {
    if index < length {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, length })
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        <[T]>::get(self, index).ok_or(SequenceError::IndexOutOfRange {
            index,
            length: <[T]>::len(self),
        })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        check_index(index, <[T]>::len(self))?;
        Ok(std::mem::replace(&mut self[index], value))
    }

    fn append(&mut self, value: T) -> Result<(), SequenceError> {
        self.try_reserve(1)
            .map_err(|cause| SequenceError::capacity_exhausted(Vec::len(self) + 1, &cause))?;
        self.push(value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let length = Vec::len(self);
        if index > length {
            return Err(SequenceError::IndexOutOfRange { index, length });
        }
        self.try_reserve(1)
            .map_err(|cause| SequenceError::capacity_exhausted(length + 1, &cause))?;
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, SequenceError> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    #[inline]
    fn iter(&self) -> std::slice::Iter<'_, T> {
        <[T]>::iter(self)
    }
}
