//! Method-call form of the combinators.

use crate::error::FunctionFailure;
use crate::sequence::{ArrayList, Sequence};

/// Fluent combinators for every [`Sequence`].
///
/// Each method forwards to the free function of the same name in
/// [`crate::combinator`] and has the same guarantees: the receiver is only
/// borrowed, elements are visited in index order, and `try_` methods stop at
/// the first failure.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::Pipeline;
/// use ordseq::sequence::ArrayList;
///
/// let words = ArrayList::from(vec!["apple", "kiwi", "banana", "fig"]);
/// let total = words
///     .filter(|word| word.len() > 3)
///     .map(|word| word.len())
///     .reduce(0, |accumulator, length| accumulator + length);
///
/// assert_eq!(total, 5 + 4 + 6);
/// ```
pub trait Pipeline: Sequence {
    /// See [`map`](super::map).
    #[must_use]
    fn map<U, F>(&self, function: F) -> ArrayList<U>
    where
        F: FnMut(&Self::Element) -> U;

    /// See [`try_map`](super::try_map).
    ///
    /// # Errors
    ///
    /// The first failure of `function`, with its element index.
    fn try_map<U, E, F>(&self, function: F) -> Result<ArrayList<U>, FunctionFailure<E>>
    where
        F: FnMut(&Self::Element) -> Result<U, E>;

    /// See [`flat_map`](super::flat_map).
    #[must_use]
    fn flat_map<U, I, F>(&self, function: F) -> ArrayList<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&Self::Element) -> I;

    /// See [`filter`](super::filter).
    #[must_use]
    fn filter<P>(&self, predicate: P) -> ArrayList<Self::Element>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool;

    /// See [`try_filter`](super::try_filter).
    ///
    /// # Errors
    ///
    /// The first failure of `predicate`, with its element index.
    fn try_filter<E, P>(&self, predicate: P) -> Result<ArrayList<Self::Element>, FunctionFailure<E>>
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> Result<bool, E>;

    /// See [`partition`](super::partition).
    #[must_use]
    fn partition<P>(&self, predicate: P) -> (ArrayList<Self::Element>, ArrayList<Self::Element>)
    where
        Self::Element: Clone,
        P: FnMut(&Self::Element) -> bool;

    /// See [`for_each`](super::for_each).
    fn for_each<F>(&self, function: F)
    where
        F: FnMut(&Self::Element);

    /// See [`try_for_each`](super::try_for_each).
    ///
    /// # Errors
    ///
    /// The first failure of `function`, with its element index.
    fn try_for_each<E, F>(&self, function: F) -> Result<(), FunctionFailure<E>>
    where
        F: FnMut(&Self::Element) -> Result<(), E>;

    /// See [`reduce`](super::reduce).
    fn reduce<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A;

    /// See [`try_reduce`](super::try_reduce).
    ///
    /// # Errors
    ///
    /// The first failure of `function`, with its element index.
    fn try_reduce<A, E, F>(&self, initial: A, function: F) -> Result<A, FunctionFailure<E>>
    where
        F: FnMut(A, &Self::Element) -> Result<A, E>;

    /// See [`find`](super::find).
    fn find<P>(&self, predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool;

    /// See [`exists`](super::exists).
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool;

    /// See [`for_all`](super::for_all).
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool;
}

impl<S: Sequence> Pipeline for S {
    #[inline]
    fn map<U, F>(&self, function: F) -> ArrayList<U>
    where
        F: FnMut(&S::Element) -> U,
    {
        super::map(self, function)
    }

    #[inline]
    fn try_map<U, E, F>(&self, function: F) -> Result<ArrayList<U>, FunctionFailure<E>>
    where
        F: FnMut(&S::Element) -> Result<U, E>,
    {
        super::try_map(self, function)
    }

    #[inline]
    fn flat_map<U, I, F>(&self, function: F) -> ArrayList<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&S::Element) -> I,
    {
        super::flat_map(self, function)
    }

    #[inline]
    fn filter<P>(&self, predicate: P) -> ArrayList<S::Element>
    where
        S::Element: Clone,
        P: FnMut(&S::Element) -> bool,
    {
        super::filter(self, predicate)
    }

    #[inline]
    fn try_filter<E, P>(&self, predicate: P) -> Result<ArrayList<S::Element>, FunctionFailure<E>>
    where
        S::Element: Clone,
        P: FnMut(&S::Element) -> Result<bool, E>,
    {
        super::try_filter(self, predicate)
    }

    #[inline]
    fn partition<P>(&self, predicate: P) -> (ArrayList<S::Element>, ArrayList<S::Element>)
    where
        S::Element: Clone,
        P: FnMut(&S::Element) -> bool,
    {
        super::partition(self, predicate)
    }

    #[inline]
    fn for_each<F>(&self, function: F)
    where
        F: FnMut(&S::Element),
    {
        super::for_each(self, function);
    }

    #[inline]
    fn try_for_each<E, F>(&self, function: F) -> Result<(), FunctionFailure<E>>
    where
        F: FnMut(&S::Element) -> Result<(), E>,
    {
        super::try_for_each(self, function)
    }

    #[inline]
    fn reduce<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, &S::Element) -> A,
    {
        super::reduce(self, initial, function)
    }

    #[inline]
    fn try_reduce<A, E, F>(&self, initial: A, function: F) -> Result<A, FunctionFailure<E>>
    where
        F: FnMut(A, &S::Element) -> Result<A, E>,
    {
        super::try_reduce(self, initial, function)
    }

    #[inline]
    fn find<P>(&self, predicate: P) -> Option<&S::Element>
    where
        P: FnMut(&S::Element) -> bool,
    {
        super::find(self, predicate)
    }

    #[inline]
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Element) -> bool,
    {
        super::exists(self, predicate)
    }

    #[inline]
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Element) -> bool,
    {
        super::for_all(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn chained_pipeline_over_array_list() {
        let numbers: ArrayList<i32> = (1..=10).collect();
        let result = numbers
            .filter(|n| n % 3 != 0)
            .map(|n| n * 10)
            .filter(|n| *n > 20);
        assert_eq!(result.as_slice(), &[40, 50, 70, 80, 100]);
        assert_eq!(numbers.len(), 10);
    }

    #[rstest]
    fn pipeline_over_vec() {
        let words = vec!["one", "two", "three"];
        let lengths = Pipeline::map(&words, |word| word.len());
        assert_eq!(lengths.reduce(0, |accumulator, length| accumulator + length), 11);
    }

    #[rstest]
    fn try_map_then_reduce() {
        let inputs = ArrayList::from(vec!["4", "5", "6"]);
        let total = inputs
            .try_map(|text| text.parse::<i32>())
            .map(|parsed| parsed.reduce(0, |accumulator, value| accumulator + value));
        assert_eq!(total, Ok(15));
    }

    #[rstest]
    fn try_for_each_method_reports_index() {
        let inputs = ArrayList::from(vec![1, -1, 2]);
        let failure = inputs
            .try_for_each(|value| if *value < 0 { Err("negative") } else { Ok(()) })
            .unwrap_err();
        assert_eq!(failure.index, 1);
    }

    #[rstest]
    fn queries_as_methods() {
        let values = ArrayList::from(vec![2, 4, 6, 7]);
        assert_eq!(values.find(|value| *value % 2 == 1), Some(&7));
        assert!(values.exists(|value| *value == 4));
        assert!(!values.for_all(|value| *value % 2 == 0));
        let (even, odd) = values.partition(|value| *value % 2 == 0);
        assert_eq!((even.len(), odd.len()), (3, 1));
    }

    #[rstest]
    fn flat_map_and_try_filter_methods() {
        let values = ArrayList::from(vec![1, 2]);
        let repeated = values.flat_map(|value| [*value, *value]);
        assert_eq!(repeated.as_slice(), &[1, 1, 2, 2]);
        let kept = repeated.try_filter(|value| Ok::<_, ()>(*value > 1));
        assert_eq!(kept.map(ArrayList::into_vec), Ok(vec![2, 2]));
    }

    #[rstest]
    fn try_reduce_and_for_each_methods() {
        let values = ArrayList::from(vec![1, 2, 3]);
        let mut seen = 0;
        values.for_each(|value| seen += value);
        assert_eq!(seen, 6);
        assert_eq!(
            values.try_reduce(1, |accumulator, value| Ok::<_, ()>(accumulator * value)),
            Ok(6)
        );
    }
}
