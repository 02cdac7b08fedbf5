//! Monad type class - sequencing dependent option computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! `flat_map` is [`Opt::onto`](crate::option::Opt::onto); right identity also
//! holds with the family constructor (`maybe`, `nullable`, `optional`) in
//! place of `pure`.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{just, nothing, Maybe};
//! use perhaps::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     match text.parse::<i32>() {
//!         Ok(value) if value > 0 => just(value),
//!         _ => nothing(),
//!     }
//! }
//!
//! assert_eq!(just("42").flat_map(parse_positive), just(42));
//! assert_eq!(just("-1").flat_map(parse_positive), nothing());
//! ```

use super::applicative::Applicative;
use crate::option::{Family, Opt};

/// A type class for applicatives whose computations may depend on earlier
/// results.
pub trait Monad: Applicative {
    /// Binds the payload to a function returning the same container type.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`, named after `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first payload.
    ///
    /// An absent `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T, K: Family> Monad for Opt<T, K> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Opt<B, K>
    where
        F: FnOnce(T) -> Opt<B, K>,
    {
        self.onto(function)
    }
}
