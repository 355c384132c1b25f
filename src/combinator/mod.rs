//! Combinators over the [`Sequence`] contract.
//!
//! Every function here borrows its input sequence and never mutates it.
//! `map`, `filter`, `flat_map` and `partition` allocate a fresh
//! [`ArrayList`]; `reduce`, `find`, `exists` and `for_all` return a scalar;
//! `for_each` exists only for its side effects. All of them run to
//! completion on the calling thread and visit elements strictly in index
//! order.
//!
//! # Failure
//!
//! The `try_` variants accept functions returning `Result`. The first `Err`
//! stops the traversal immediately: later elements are not visited, any
//! partially built output is dropped, and the error comes back wrapped in a
//! [`FunctionFailure`] carrying the failing index. The input is untouched.
//!
//! A function that panics unwinds through the combinator in the same way;
//! the partial output is dropped during unwinding.
//!
//! # Chaining
//!
//! Results are `ArrayList`s, which are `Sequence`s, so they feed straight
//! into the next combinator. [`Pipeline`] exposes the same operations as
//! methods for fluent use.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::combinator::{filter, map, reduce};
//! use ordseq::sequence::ArrayList;
//!
//! let numbers = ArrayList::from(vec![1, 2, 3, 4, 5, 6]);
//! let evens = filter(&numbers, |n| n % 2 == 0);
//! let squares = map(&evens, |n| n * n);
//! let total = reduce(&squares, 0, |accumulator, n| accumulator + n);
//!
//! assert_eq!(total, 4 + 16 + 36);
//! assert_eq!(numbers.len(), 6);
//! ```

mod pipeline;

pub use pipeline::Pipeline;

use crate::error::FunctionFailure;
use crate::sequence::{ArrayList, Sequence};

fn abort<E>(combinator: &'static str, index: usize, source: E) -> FunctionFailure<E> {
    tracing::debug!(combinator, index, "caller function failed, traversal aborted");
    FunctionFailure { index, source }
}

// =============================================================================
// Map
// =============================================================================

/// Builds a new list whose element `i` is `function(sequence[i])`.
///
/// `function` is applied once per element, in index order. The result has
/// the same length as `sequence`.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::map;
///
/// let words = vec!["a", "bb", "ccc"];
/// let lengths = map(&words, |word| word.len());
/// assert_eq!(lengths.as_slice(), &[1, 2, 3]);
/// ```
#[must_use]
pub fn map<S, U, F>(sequence: &S, function: F) -> ArrayList<U>
where
    S: Sequence,
    F: FnMut(&S::Element) -> U,
{
    sequence.iter().map(function).collect()
}

/// Fallible [`map`].
///
/// # Errors
///
/// Returns a [`FunctionFailure`] with the index of the first element for
/// which `function` returned `Err`. No partial result is returned.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::try_map;
/// use ordseq::sequence::ArrayList;
///
/// let parsed = try_map(&ArrayList::from(vec!["1", "2"]), |text| text.parse::<u8>());
/// assert_eq!(parsed.unwrap().as_slice(), &[1, 2]);
/// ```
pub fn try_map<S, U, E, F>(
    sequence: &S,
    mut function: F,
) -> Result<ArrayList<U>, FunctionFailure<E>>
where
    S: Sequence,
    F: FnMut(&S::Element) -> Result<U, E>,
{
    let mut results = Vec::with_capacity(sequence.len());
    for (index, element) in sequence.iter().enumerate() {
        match function(element) {
            Ok(value) => results.push(value),
            Err(source) => return Err(abort("try_map", index, source)),
        }
    }
    Ok(ArrayList::from(results))
}

/// Maps each element to an iterable and concatenates the results in order.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::flat_map;
///
/// let pairs = vec!["md5=ab", "sha1=cd"];
/// let parts = flat_map(&pairs, |&pair| pair.split('='));
/// assert_eq!(parts.as_slice(), &["md5", "ab", "sha1", "cd"]);
/// ```
#[must_use]
pub fn flat_map<S, U, I, F>(sequence: &S, function: F) -> ArrayList<U>
where
    S: Sequence,
    I: IntoIterator<Item = U>,
    F: FnMut(&S::Element) -> I,
{
    sequence.iter().flat_map(function).collect()
}

// =============================================================================
// Filter
// =============================================================================

/// Builds a new list holding clones of the elements for which `predicate`
/// returns `true`, in their original relative order.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::filter;
///
/// let values = vec![5, 12, 7, 30];
/// assert_eq!(filter(&values, |value| *value > 10).as_slice(), &[12, 30]);
/// ```
#[must_use]
pub fn filter<S, P>(sequence: &S, mut predicate: P) -> ArrayList<S::Element>
where
    S: Sequence,
    S::Element: Clone,
    P: FnMut(&S::Element) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Fallible [`filter`].
///
/// # Errors
///
/// Returns a [`FunctionFailure`] with the index of the first element for
/// which `predicate` returned `Err`.
pub fn try_filter<S, E, P>(
    sequence: &S,
    mut predicate: P,
) -> Result<ArrayList<S::Element>, FunctionFailure<E>>
where
    S: Sequence,
    S::Element: Clone,
    P: FnMut(&S::Element) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        match predicate(element) {
            Ok(true) => kept.push(element.clone()),
            Ok(false) => {}
            Err(source) => return Err(abort("try_filter", index, source)),
        }
    }
    Ok(ArrayList::from(kept))
}

/// Splits the elements into `(matching, rest)`, both in original order.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::partition;
///
/// let (even, odd) = partition(&vec![1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(even.as_slice(), &[2, 4]);
/// assert_eq!(odd.as_slice(), &[1, 3]);
/// ```
#[must_use]
pub fn partition<S, P>(
    sequence: &S,
    mut predicate: P,
) -> (ArrayList<S::Element>, ArrayList<S::Element>)
where
    S: Sequence,
    S::Element: Clone,
    P: FnMut(&S::Element) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for element in sequence.iter() {
        if predicate(element) {
            matching.push(element.clone());
        } else {
            rest.push(element.clone());
        }
    }
    (ArrayList::from(matching), ArrayList::from(rest))
}

// =============================================================================
// ForEach
// =============================================================================

/// Calls `function` once per element, in index order.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::for_each;
///
/// let mut seen = Vec::new();
/// for_each(&vec!['a', 'b'], |letter| seen.push(*letter));
/// assert_eq!(seen, vec!['a', 'b']);
/// ```
pub fn for_each<S, F>(sequence: &S, function: F)
where
    S: Sequence,
    F: FnMut(&S::Element),
{
    sequence.iter().for_each(function);
}

/// Fallible [`for_each`]: stops at the first `Err`.
///
/// # Errors
///
/// Returns a [`FunctionFailure`] with the index of the failing element.
/// Elements after it are not visited.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::try_for_each;
///
/// let mut visited = Vec::new();
/// let outcome = try_for_each(&vec![1, 2, 3], |n| {
///     visited.push(*n);
///     if *n == 2 { Err("stop") } else { Ok(()) }
/// });
/// assert_eq!(outcome.unwrap_err().index, 1);
/// assert_eq!(visited, vec![1, 2]);
/// ```
pub fn try_for_each<S, E, F>(sequence: &S, mut function: F) -> Result<(), FunctionFailure<E>>
where
    S: Sequence,
    F: FnMut(&S::Element) -> Result<(), E>,
{
    for (index, element) in sequence.iter().enumerate() {
        function(element).map_err(|source| abort("try_for_each", index, source))?;
    }
    Ok(())
}

// =============================================================================
// Reduce
// =============================================================================

/// Left fold: starts from `initial` and combines it with each element in
/// index order.
///
/// An empty sequence returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use ordseq::combinator::reduce;
///
/// let digits = vec![1, 2, 3];
/// let number = reduce(&digits, 0, |accumulator, digit| accumulator * 10 + digit);
/// assert_eq!(number, 123);
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, 0, |accumulator, digit| accumulator + digit), 0);
/// ```
pub fn reduce<S, A, F>(sequence: &S, initial: A, function: F) -> A
where
    S: Sequence,
    F: FnMut(A, &S::Element) -> A,
{
    sequence.iter().fold(initial, function)
}

/// Fallible [`reduce`]. The partial accumulator is dropped on failure.
///
/// # Errors
///
/// Returns a [`FunctionFailure`] with the index of the failing element.
pub fn try_reduce<S, A, E, F>(
    sequence: &S,
    initial: A,
    mut function: F,
) -> Result<A, FunctionFailure<E>>
where
    S: Sequence,
    F: FnMut(A, &S::Element) -> Result<A, E>,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate() {
        accumulator =
            function(accumulator, element).map_err(|source| abort("try_reduce", index, source))?;
    }
    Ok(accumulator)
}

// =============================================================================
// Queries
// =============================================================================

/// Returns the first element for which `predicate` returns `true`.
pub fn find<S, P>(sequence: &S, mut predicate: P) -> Option<&S::Element>
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    sequence.iter().find(|element| predicate(element))
}

/// Returns `true` if `predicate` holds for at least one element.
pub fn exists<S, P>(sequence: &S, predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns `true` if `predicate` holds for every element (vacuously `true`
/// when empty).
pub fn for_all<S, P>(sequence: &S, predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    sequence.iter().all(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn sample() -> ArrayList<i32> {
        ArrayList::from(vec![3, 1, 4, 1, 5, 9, 2, 6])
    }

    // =========================================================================
    // Map Tests
    // =========================================================================

    #[rstest]
    fn map_preserves_length_and_order() {
        let source = sample();
        let result = map(&source, |value| value * 2);
        assert_eq!(result.len(), source.len());
        assert_eq!(result.as_slice(), &[6, 2, 8, 2, 10, 18, 4, 12]);
    }

    #[rstest]
    fn map_does_not_mutate_input() {
        let source = sample();
        let _ = map(&source, |value| value + 100);
        assert_eq!(source, sample());
    }

    #[rstest]
    fn map_works_over_vec() {
        let source = vec!["x", "yy"];
        assert_eq!(map(&source, |word| word.len()).as_slice(), &[1, 2]);
    }

    #[rstest]
    fn try_map_success() {
        let source = ArrayList::from(vec!["10", "20"]);
        let result: Result<ArrayList<i32>, _> = try_map(&source, |text| text.parse::<i32>());
        assert_eq!(result.unwrap().as_slice(), &[10, 20]);
    }

    #[rstest]
    fn try_map_stops_at_first_failure() {
        let source = ArrayList::from(vec!["1", "x", "3", "y"]);
        let calls = Cell::new(0);
        let failure = try_map(&source, |text| {
            calls.set(calls.get() + 1);
            text.parse::<i32>()
        })
        .unwrap_err();
        assert_eq!(failure.index, 1);
        assert_eq!(calls.get(), 2);
        assert_eq!(source.as_slice(), &["1", "x", "3", "y"]);
    }

    #[rstest]
    fn map_panic_leaves_input_intact() {
        let source = sample();
        let outcome = std::panic::catch_unwind(|| {
            map(&source, |value| {
                assert!(*value != 9, "refusing nine");
                *value
            })
        });
        assert!(outcome.is_err());
        assert_eq!(source, sample());
    }

    #[rstest]
    fn flat_map_concatenates_in_order() {
        let source = ArrayList::from(vec![1, 2, 3]);
        let result = flat_map(&source, |value| vec![*value; *value as usize]);
        assert_eq!(result.as_slice(), &[1, 2, 2, 3, 3, 3]);
    }

    // =========================================================================
    // Filter Tests
    // =========================================================================

    #[rstest]
    fn filter_keeps_relative_order() {
        let result = filter(&sample(), |value| *value > 2);
        assert_eq!(result.as_slice(), &[3, 4, 5, 9, 6]);
    }

    #[rstest]
    #[case(|_: &i32| true, 8)]
    #[case(|_: &i32| false, 0)]
    #[case(|value: &i32| *value == 1, 2)]
    fn filter_lengths(#[case] predicate: fn(&i32) -> bool, #[case] expected: usize) {
        assert_eq!(filter(&sample(), predicate).len(), expected);
    }

    #[rstest]
    fn try_filter_reports_failing_index() {
        let failure = try_filter(&sample(), |value| {
            if *value == 5 { Err("five") } else { Ok(*value > 1) }
        })
        .unwrap_err();
        assert_eq!(failure.index, 4);
        assert_eq!(failure.source, "five");
    }

    #[rstest]
    fn try_filter_success() {
        let result = try_filter(&sample(), |value| Ok::<_, ()>(*value % 2 == 0));
        assert_eq!(result.unwrap().as_slice(), &[4, 2, 6]);
    }

    #[rstest]
    fn partition_splits_by_predicate() {
        let (small, large) = partition(&sample(), |value| *value < 4);
        assert_eq!(small.as_slice(), &[3, 1, 1, 2]);
        assert_eq!(large.as_slice(), &[4, 5, 9, 6]);
    }

    // =========================================================================
    // ForEach Tests
    // =========================================================================

    #[rstest]
    fn for_each_visits_in_index_order() {
        let mut visited = Vec::new();
        for_each(&sample(), |value| visited.push(*value));
        assert_eq!(visited, sample().into_vec());
    }

    #[rstest]
    fn for_each_on_empty_never_calls() {
        let empty: ArrayList<i32> = ArrayList::new();
        let mut calls = 0;
        for_each(&empty, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn try_for_each_stops_immediately() {
        let mut visited = Vec::new();
        let failure = try_for_each(&sample(), |value| {
            visited.push(*value);
            if *value == 4 { Err(*value) } else { Ok(()) }
        })
        .unwrap_err();
        assert_eq!(failure, FunctionFailure { index: 2, source: 4 });
        assert_eq!(visited, vec![3, 1, 4]);
    }

    #[rstest]
    fn try_for_each_empty_is_ok() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(try_for_each(&empty, |_| Err::<(), _>("never")), Ok(()));
    }

    // =========================================================================
    // Reduce Tests
    // =========================================================================

    #[rstest]
    fn reduce_is_left_fold() {
        let source = ArrayList::from(vec!["a", "b", "c"]);
        let joined = reduce(&source, String::new(), |mut accumulator, letter| {
            accumulator.push_str(letter);
            accumulator
        });
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn reduce_empty_returns_initial() {
        let empty: ArrayList<i32> = ArrayList::new();
        assert_eq!(reduce(&empty, 0, |accumulator, value| accumulator * value + 1), 0);
    }

    #[rstest]
    fn try_reduce_overflow_fails() {
        let source = ArrayList::from(vec![200_u8, 50, 10]);
        let failure = try_reduce(&source, 0_u8, |accumulator, value| {
            accumulator.checked_add(*value).ok_or("overflow")
        })
        .unwrap_err();
        assert_eq!(failure.index, 2);
    }

    #[rstest]
    fn try_reduce_success() {
        let source = ArrayList::from(vec![1_u8, 2, 3]);
        let total = try_reduce(&source, 0_u8, |accumulator, value| {
            accumulator.checked_add(*value).ok_or("overflow")
        });
        assert_eq!(total, Ok(6));
    }

    // =========================================================================
    // Query Tests
    // =========================================================================

    #[rstest]
    fn find_returns_first_match() {
        let source = sample();
        assert_eq!(find(&source, |value| *value > 3), Some(&4));
        assert_eq!(find(&source, |value| *value > 100), None);
    }

    #[rstest]
    fn exists_and_for_all() {
        let source = sample();
        assert!(exists(&source, |value| *value == 9));
        assert!(!exists(&source, |value| *value == 7));
        assert!(for_all(&source, |value| *value > 0));
        assert!(!for_all(&source, |value| *value > 1));

        let empty: ArrayList<i32> = ArrayList::new();
        assert!(!exists(&empty, |_| true));
        assert!(for_all(&empty, |_| false));
    }
}
