//! Functor type class - mapping over option payloads.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For the option families an absent value maps to the same absent
//! singleton, so both laws also hold by reference for absent inputs.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{just, naught, Maybe};
//! use perhaps::typeclass::Functor;
//!
//! let transformed: Maybe<String> = just(5).fmap(|n: i32| n.to_string());
//! assert_eq!(transformed, just("5".to_string()));
//!
//! let absent: Maybe<String> = naught::<i32>().fmap(|n: i32| n.to_string());
//! assert_eq!(absent, naught());
//! ```

use super::higher::TypeConstructor;
use crate::option::{Family, Opt};

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the payload, keeping the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the payload without consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{some, Optional};
    /// use perhaps::typeclass::Functor;
    ///
    /// let name: Optional<String> = some("hello".to_string());
    /// let length: Optional<usize> = name.fmap_ref(|text| text.len());
    /// assert_eq!(length, some(5));
    /// assert_eq!(name, some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only presence.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<T, K: Family> Functor for Opt<T, K> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Opt<B, K>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Opt<B, K>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{Maybe, just, naught, nil, nothing, solum};
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_just() {
        let y: Maybe<String> = just(5).fmap(|n: i32| n.to_string());
        assert_eq!(y, just("5".to_string()));
    }

    #[rstest]
    fn maybe_fmap_keeps_the_sentinel() {
        assert_eq!(naught::<i32>().fmap(|n| n + 1), naught());
        assert_eq!(nothing::<i32>().fmap(|n| n + 1), nothing());
    }

    #[rstest]
    fn nullable_replace_and_void() {
        assert_eq!(solum(5).replace("replaced"), solum("replaced"));
        assert_eq!(nil::<i32>().replace("replaced"), nil());
        assert_eq!(solum(5).void(), solum(()));
        assert_eq!(nil::<i32>().void(), nil());
    }

    /// Identity law: fa.fmap(|x| x) == fa
    #[rstest]
    #[case(just(42))]
    #[case(naught())]
    #[case(nothing())]
    fn maybe_identity_law(#[case] value: Maybe<i32>) {
        assert_eq!(value.fmap(|x| x), value);
    }

    /// Composition law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
    #[rstest]
    #[case(just(5), just(12))]
    #[case(naught(), naught())]
    fn maybe_composition_law(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, expected);
    }
}
