//! Applicative type class - combining independent option values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! When combining option values, the first absent operand (in argument order)
//! decides the result, so its sentinel is preserved.

use super::functor::Functor;
use crate::option::{Family, Opt};

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use perhaps::option::{just, naught, Maybe};
/// use perhaps::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, just(42));
///
/// assert_eq!(just(3).map2(just(4), |x, y| x + y), just(7));
/// assert_eq!(just(3).map2(naught::<i32>(), |x, y| x + y), naught());
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the present variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left payload when both are present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right payload when both are present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a contained function to a contained value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<T, K: Family> Applicative for Opt<T, K> {
    #[inline]
    fn pure<B>(value: B) -> Opt<B, K> {
        Opt::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Opt<B, K>, function: F) -> Opt<C, K>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Opt::Present(b)) => Opt::Present(function(a, b)),
            (Self::Absent(absent), _) | (Self::Present(_), Opt::Absent(absent)) => {
                Opt::Absent(absent)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Opt<B, K>, third: Opt<C, K>, function: F) -> Opt<D, K>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.map2(second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Opt<B, K>) -> Opt<Output, K>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
