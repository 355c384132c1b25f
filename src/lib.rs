//! # ordseq
//!
//! Type-safe ordered sequences with chainable functional combinators.
//!
//! ## Overview
//!
//! Every sequence has a single element type fixed at compile time, so none
//! of the operations below needs a runtime type check. The crate provides:
//!
//! - **Sequence core**: the [`Sequence`](sequence::Sequence) trait (append,
//!   insert, indexed get/set, remove, length, ordered export)
//! - **Array-backed list**: [`ArrayList`](sequence::ArrayList), a contiguous
//!   growable implementation with amortized O(1) append
//! - **Combinators**: map, filter, for-each and reduce (plus fallible
//!   `try_` variants) written against the `Sequence` trait
//! - **Ordering**: structural equality and a stable sort
//! - **Type classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their implementations
//! - `combinator`: Map / filter / for-each / reduce and the `Pipeline` trait
//! - `ordering`: Structural equality, stable sorting and the `Ordered` trait
//!
//! All three are enabled by default.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (backing-store growth at `TRACE`,
//! aborted combinators at `DEBUG`, failed reservations at `WARN`) and never
//! installs a subscriber itself.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "combinator", feature = "ordering"))]
//! # {
//! use ordseq::prelude::*;
//!
//! let list = ArrayList::from(vec![5, 3, 8, 1]);
//! let result = list
//!     .filter(|n| *n > 2)
//!     .map(|n| n * 10)
//!     .sorted();
//!
//! assert_eq!(result.to_vec(), vec![30, 50, 80]);
//! assert_eq!(list.len(), 4);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{FunctionFailure, SequenceError};
    pub use crate::sequence::{ArrayList, Sequence};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::Pipeline;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::Ordered;
}

pub mod error;
pub mod sequence;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "ordering")]
pub mod ordering;
