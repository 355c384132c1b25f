//! Type classes for [`ArrayList`](crate::sequence::ArrayList).
//!
//! - [`Functor`]: owned and borrowed element-wise mapping
//! - [`Foldable`]: owned left and right folds, and `fold_map`
//! - [`Semigroup`] / [`Monoid`]: list concatenation with the empty list as
//!   identity
//!
//! Where the combinators borrow any [`Sequence`](crate::sequence::Sequence),
//! these consume the list and move elements out of it, and they compose in
//! generic code through [`TypeConstructor`].
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::ArrayList;
//! use ordseq::typeclass::{Foldable, Functor};
//!
//! fn total_length<F>(words: F) -> usize
//! where
//!     F: Functor<Inner = &'static str>,
//!     F::WithType<usize>: Foldable<Inner = usize>,
//! {
//!     words
//!         .fmap(str::len)
//!         .fold_left(0, |accumulator, length| accumulator + length)
//! }
//!
//! assert_eq!(total_length(ArrayList::from(vec!["ab", "cde"])), 5);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
