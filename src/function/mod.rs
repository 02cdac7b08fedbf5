//! Small function combinators.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`compose`]: right-to-left composition, `compose(g, f)(x) == g(f(x))`
//!
//! The option law checks are phrased with these: `to(identity)` is the
//! identity, and `map(f).map(g)` equals `map(compose(g, f))`.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::function::{compose, identity};
//! use perhaps::option::just;
//!
//! let increment = |n: i32| n + 1;
//! let double = |n: i32| n * 2;
//!
//! assert_eq!(just(5).map(identity), just(5));
//! assert_eq!(just(5).map(increment).map(double), just(5).map(compose(double, increment)));
//! ```

/// Returns the value unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use perhaps::function::constant;
/// use perhaps::option::nothing;
///
/// let fallback = constant::<_, ()>(7);
/// assert_eq!(nothing::<i32>().or_else(|| fallback(())), 7);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions right to left: the result applies `inner`, then
/// `outer`.
#[inline]
pub fn compose<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |value| outer(inner(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{Maybe, Raw, just, maybe, naught, nil, solum};
    use rstest::rstest;

    #[rstest]
    #[case(just(3))]
    #[case(naught())]
    fn identity_leaves_options_unchanged(#[case] value: Maybe<i32>) {
        assert_eq!(value.map(identity), value);
        assert_eq!(identity(value.value()), value.value());
    }

    #[rstest]
    fn constant_supplies_the_same_fallback_each_time() {
        let fallback = constant::<_, ()>("guest");
        assert_eq!(nil::<&str>().or_else(|| fallback(())), "guest");
        assert_eq!(solum("alice").or_else(|| fallback(())), "alice");
        assert_eq!(fallback(()), "guest");
    }

    #[rstest]
    #[case(Raw::Present(0), Raw::Present(2))]
    #[case(Raw::Present(4), Raw::Present(10))]
    #[case(Raw::Unset, Raw::Unset)]
    fn compose_applies_inner_first(#[case] input: Raw<i32>, #[case] expected: Raw<i32>) {
        let composed = compose(|n: i32| n * 2, |n: i32| n + 1);
        assert_eq!(maybe(input).map(&composed).value(), expected);
    }

    #[rstest]
    fn compose_matches_chained_maps() {
        let length = |text: &str| text.len();
        let is_long = |size: usize| size > 3;
        assert_eq!(
            solum("perhaps").map(compose(is_long, length)),
            solum("perhaps").map(length).map(is_long)
        );
    }
}
