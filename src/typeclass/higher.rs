//! Higher-kinded type emulation through a generic associated type.
//!
//! Rust cannot name `ArrayList<_>` as a type constructor on its own.
//! [`TypeConstructor::WithType`] stands in for it, giving [`Functor::fmap`]
//! a way to say "the same container holding `B`".
//!
//! [`Functor::fmap`]: super::Functor::fmap

/// A container type together with its element type.
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::ArrayList;

    #[test]
    fn array_list_with_type_is_array_list() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = u8, WithType<String> = ArrayList<String>>,
        {
        }
        assert_with_type::<ArrayList<u8>>();
    }

    #[test]
    fn with_type_of_inner_is_self() {
        fn assert_round_trip<T>()
        where
            T: TypeConstructor<WithType<char> = T, Inner = char>,
        {
        }
        assert_round_trip::<ArrayList<char>>();
    }
}
