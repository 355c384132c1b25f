//! Associative concatenation.
//!
//! `combine` must satisfy `a.combine(b).combine(c) == a.combine(b.combine(c))`.
//! For [`ArrayList`](crate::sequence::ArrayList) it appends `other` after
//! `self`, keeping both orders.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::ArrayList;
//! use ordseq::typeclass::Semigroup;
//!
//! let front = ArrayList::from(vec![1, 2]);
//! let back = ArrayList::from(vec![3, 4]);
//! assert_eq!(front.combine(back).as_slice(), &[1, 2, 3, 4]);
//! ```

/// Values that can be joined by an associative operation.
pub trait Semigroup {
    /// Joins `other` onto `self`.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
