//! Owned folds.
//!
//! `fold_left` visits elements in index order, `fold_right` in reverse.
//! For an associative `f` the two agree:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, |x, acc| f(acc, x))
//! ```
//!
//! `fold_left` on an [`ArrayList`](crate::sequence::ArrayList) gives the
//! same result as `combinator::reduce` over a borrow of it, but moves the
//! elements into the function instead of lending them.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sequence::ArrayList;
//! use ordseq::typeclass::Foldable;
//!
//! let names = ArrayList::from(vec![String::from("md5"), String::from("sha1")]);
//! let joined = names.fold_left(String::new(), |mut line, name| {
//!     if !line.is_empty() {
//!         line.push(',');
//!     }
//!     line.push_str(&name);
//!     line
//! });
//! assert_eq!(joined, "md5,sha1");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Structures that can be collapsed into a single value.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element into a [`Monoid`] and combines the results in
    /// index order.
    ///
    /// With `M = ArrayList<U>` this is an owned flat-map.
    ///
    /// ```rust
    /// use ordseq::sequence::ArrayList;
    /// use ordseq::typeclass::Foldable;
    ///
    /// let entries = ArrayList::from(vec!["md5=ab", "sha1=cd"]);
    /// let parts: ArrayList<&str> = entries.fold_map(|entry| entry.split('=').collect());
    /// assert_eq!(parts.as_slice(), &["md5", "ab", "sha1", "cd"]);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }
}
