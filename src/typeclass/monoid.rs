//! Concatenation with an identity value.
//!
//! `T::empty()` is neutral on both sides of [`Semigroup::combine`]. For
//! [`ArrayList`](crate::sequence::ArrayList) it is the empty list, which lets
//! any number of lists be flattened with [`Monoid::combine_all`].
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::ArrayList;
//! use ordseq::typeclass::Monoid;
//!
//! let batches = vec![
//!     ArrayList::from(vec!["md5"]),
//!     ArrayList::empty(),
//!     ArrayList::from(vec!["sha1", "sha256"]),
//! ];
//! assert_eq!(
//!     ArrayList::combine_all(batches).as_slice(),
//!     &["md5", "sha1", "sha256"]
//! );
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity value.
pub trait Monoid: Semigroup + Sized {
    /// The identity value.
    fn empty() -> Self;

    /// Combines the values left to right, starting from [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().fold(Self::empty(), Self::combine)
    }
}
