//! Error types for sequence operations and combinators.
//!
//! Two kinds of failure exist:
//!
//! - [`SequenceError`]: raised by the sequence itself (bad index, storage
//!   that cannot grow). The sequence is never left in a partially modified
//!   state.
//! - [`FunctionFailure`]: raised when a caller-supplied function passed to a
//!   fallible combinator (`try_map`, `try_filter`, ...) returns `Err`. The
//!   combinator stops at that element and no partial result escapes.

use std::collections::TryReserveError;

/// Errors raised by operations of the [`Sequence`](crate::sequence::Sequence)
/// contract.
///
/// # Examples
///
/// ```rust
/// use ordseq::error::SequenceError;
/// use ordseq::sequence::{ArrayList, Sequence};
///
/// let list = ArrayList::from(vec![1, 2, 3]);
/// assert_eq!(
///     list.get(3),
///     Err(SequenceError::IndexOutOfRange { index: 3, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The index is outside `[0, length)` (or `[0, length]` for insertion).
    #[error("index {index} is out of range for a sequence of length {length}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },

    /// The backing store could not grow to the requested capacity.
    #[error("cannot grow backing store to a capacity of {requested} elements")]
    CapacityExhausted {
        /// The capacity the growth policy asked for.
        requested: usize,
    },
}

impl SequenceError {
    pub(crate) fn capacity_exhausted(requested: usize, cause: &TryReserveError) -> Self {
        tracing::warn!(requested, %cause, "backing store reservation failed");
        Self::CapacityExhausted { requested }
    }

    pub(crate) fn capacity_overflow(length: usize, additional: usize) -> Self {
        tracing::warn!(length, additional, "requested capacity overflows usize");
        Self::CapacityExhausted {
            requested: usize::MAX,
        }
    }
}

/// A caller-supplied function failed while a combinator was traversing a
/// sequence.
///
/// `index` is the position of the element being processed when `source` was
/// returned. Elements after `index` were not visited.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "combinator")]
/// # {
/// use ordseq::combinator::try_map;
/// use ordseq::sequence::ArrayList;
///
/// let words = ArrayList::from(vec!["1", "two", "3"]);
/// let failure = try_map(&words, |word| word.parse::<i32>()).unwrap_err();
/// assert_eq!(failure.index, 1);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("function failed at element {index}: {source}")]
pub struct FunctionFailure<E> {
    /// Index of the element the function failed on.
    pub index: usize,
    /// The error returned by the function.
    pub source: E,
}

impl<E> FunctionFailure<E> {
    /// Discards the index, returning the underlying error.
    #[inline]
    pub fn into_source(self) -> E {
        self.source
    }
}
