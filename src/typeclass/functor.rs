//! Element-wise mapping that keeps the container's shape.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Unlike `combinator::map`, which borrows any
//! [`Sequence`](crate::sequence::Sequence), `fmap` consumes its container and
//! hands each element to the function by value, so no `Clone` bound is
//! needed.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::ArrayList;
//! use ordseq::typeclass::Functor;
//!
//! let numbers = ArrayList::from(vec![1, 2, 3]);
//! let labels: ArrayList<String> = numbers.fmap(|n| format!("#{n}"));
//! assert_eq!(labels.as_slice(), &["#1", "#2", "#3"]);
//! ```

use super::higher::TypeConstructor;

/// Containers whose elements can be mapped one by one, in order.
///
/// The function is `FnMut` and called exactly once per element.
pub trait Functor: TypeConstructor {
    /// Maps every element by value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Maps every element by reference. The container is left as it was.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}
