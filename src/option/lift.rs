//! Free-function forms of the chain operations.
//!
//! Each function closes over its argument and returns a closure taking an
//! [`Opt`] and calling the method of the same name. The closures are `FnMut`
//! so they fit [`Iterator::map`].
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{just, lift, nothing, Maybe};
//!
//! let values: Vec<Maybe<i32>> = vec![just(1), nothing(), just(-3)];
//! let results: Vec<i32> = values
//!     .into_iter()
//!     .map(lift::map(|value: i32| value * 10))
//!     .map(lift::that(|value: &i32| *value > 0))
//!     .map(lift::or(0))
//!     .collect();
//! assert_eq!(results, vec![10, 0, 0]);
//! ```

use std::ops::Index;

use super::family::{Family, Opt};
use crate::predicate::Proposition;

/// Lifts [`Opt::onto`].
pub fn onto<T, U, K, F>(mut function: F) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    F: FnMut(T) -> Opt<U, K>,
{
    move |option| option.onto(&mut function)
}

/// Lifts [`Opt::to`].
pub fn to<T, U, K, F>(mut function: F) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    F: FnMut(T) -> K::Raw<U>,
{
    move |option| option.to(&mut function)
}

/// Lifts [`Opt::map`].
pub fn map<T, U, K, F>(mut function: F) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    F: FnMut(T) -> U,
{
    move |option| option.map(&mut function)
}

/// Lifts [`Opt::pick`].
pub fn pick<T, U, Q, K>(key: Q) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    Q: Clone,
    T: Index<Q, Output = K::Raw<U>>,
    K::Raw<U>: Clone,
{
    move |option| option.pick(key.clone())
}

/// Lifts [`Opt::pluck`].
pub fn pluck<T, Q, K>(key: Q) -> impl FnMut(Opt<T, K>) -> Opt<T::Output, K>
where
    K: Family,
    Q: Clone,
    T: Index<Q>,
    T::Output: Sized + Clone,
{
    move |option| option.pluck(key.clone())
}

/// Lifts [`Opt::that`].
pub fn that<T, K, P>(mut filter: P) -> impl FnMut(Opt<T, K>) -> Opt<T, K>
where
    K: Family,
    P: FnMut(&T) -> bool,
{
    move |option| option.that(&mut filter)
}

/// Lifts [`Opt::which`].
pub fn which<T, U, E, K, N>(mut narrow: N) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    N: FnMut(T) -> Result<U, E>,
{
    move |option| option.which(&mut narrow)
}

/// Lifts [`Opt::when`]. The proposition is cloned for every call.
pub fn when<T, K, P>(condition: P) -> impl FnMut(Opt<T, K>) -> Opt<T, K>
where
    K: Family,
    P: Proposition + Clone,
{
    move |option| option.when(condition.clone())
}

/// Lifts [`Opt::otherwise`]. The fallback is cloned only for absent input.
pub fn otherwise<T, K>(fallback: K::Raw<T>) -> impl FnMut(Opt<T, K>) -> Opt<T, K>
where
    K: Family,
    K::Raw<T>: Clone,
{
    move |option| option.otherwise_with(|| fallback.clone())
}

/// Lifts [`Opt::otherwise_with`].
pub fn otherwise_with<T, K, F>(mut fallback: F) -> impl FnMut(Opt<T, K>) -> Opt<T, K>
where
    K: Family,
    F: FnMut() -> K::Raw<T>,
{
    move |option| option.otherwise_with(&mut fallback)
}

/// Lifts [`Opt::or`]. The fallback is cloned only for absent input.
pub fn or<T, K>(fallback: T) -> impl FnMut(Opt<T, K>) -> T
where
    K: Family,
    T: Clone,
{
    move |option| option.or_else(|| fallback.clone())
}

/// Lifts [`Opt::or_else`].
pub fn or_else<T, K, F>(mut fallback: F) -> impl FnMut(Opt<T, K>) -> T
where
    K: Family,
    F: FnMut() -> T,
{
    move |option| option.or_else(&mut fallback)
}

/// Lifts [`Opt::run`].
pub fn run<T, K, P>(mut procedure: P) -> impl FnMut(Opt<T, K>) -> Opt<T, K>
where
    K: Family,
    P: FnMut(&T),
{
    move |option| option.run(&mut procedure)
}

/// Lifts [`Opt::lift`].
pub fn lift<T, U, K, F>(mut function: F) -> impl FnMut(Opt<T, K>) -> Opt<U, K>
where
    K: Family,
    F: FnMut(K::Raw<T>) -> K::Raw<U>,
{
    move |option| option.lift(&mut function)
}

/// Lifts [`Opt::fold`].
pub fn fold<T, U, K, F>(mut function: F) -> impl FnMut(Opt<T, K>) -> U
where
    K: Family,
    F: FnMut(K::Raw<T>) -> U,
{
    move |option| option.fold(&mut function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{
        Maybe, MaybeFamily, Nullable, NullableFamily, Optional, OptionalFamily, Raw, just, naught,
        nil, none, nothing, solum, some,
    };
    use rstest::rstest;
    use std::cell::Cell;

    fn sample() -> Vec<Maybe<i32>> {
        vec![just(2), naught(), just(3), nothing()]
    }

    #[rstest]
    fn onto_lifts_bind() {
        let halve = |value: i32| if value % 2 == 0 { just(value / 2) } else { nothing() };
        let results: Vec<Maybe<i32>> = sample().into_iter().map(onto(halve)).collect();
        assert_eq!(results, vec![just(1), naught(), nothing(), nothing()]);
    }

    #[rstest]
    fn to_lifts_raw_returning_maps() {
        let results: Vec<Nullable<i32>> = vec![solum(1), nil(), solum(i32::MAX)]
            .into_iter()
            .map(to::<i32, i32, NullableFamily, _>(|value: i32| value.checked_add(1)))
            .collect();
        assert_eq!(results, vec![solum(2), nil(), nil()]);
    }

    #[rstest]
    fn pluck_lifts_indexing() {
        let rows: Vec<Optional<Vec<i32>>> = vec![some(vec![1, 2]), none()];
        let firsts: Vec<Optional<i32>> = rows.into_iter().map(pluck(0_usize)).collect();
        assert_eq!(firsts, vec![some(1), none()]);
    }

    #[rstest]
    fn pick_lifts_raw_element_indexing() {
        let rows: Vec<Optional<Vec<Option<i32>>>> =
            vec![some(vec![Some(1), None]), some(vec![None, Some(2)]), none()];
        let firsts: Vec<Optional<i32>> = rows
            .into_iter()
            .map(pick::<Vec<Option<i32>>, i32, usize, OptionalFamily>(0_usize))
            .collect();
        assert_eq!(firsts, vec![some(1), none(), none()]);
    }

    #[rstest]
    fn which_lifts_narrowing() {
        let results: Vec<Maybe<u8>> = vec![just(7_i32), just(700), naught()]
            .into_iter()
            .map(which(u8::try_from))
            .collect();
        assert_eq!(results, vec![just(7_u8), nothing(), naught()]);
    }

    #[rstest]
    fn when_lifts_conditions() {
        let kept: Vec<Maybe<i32>> = sample().into_iter().map(when(true)).collect();
        assert_eq!(kept, sample());
        let dropped: Vec<Maybe<i32>> = sample().into_iter().map(when(false)).collect();
        assert_eq!(dropped, vec![nothing(), naught(), nothing(), nothing()]);
    }

    #[rstest]
    fn otherwise_lifts_raw_fallbacks() {
        let results: Vec<Maybe<i32>> = sample()
            .into_iter()
            .map(otherwise::<i32, MaybeFamily>(Raw::Present(0)))
            .collect();
        assert_eq!(results, vec![just(2), just(0), just(3), just(0)]);
    }

    #[rstest]
    fn otherwise_with_runs_only_for_absent_items() {
        let calls = Cell::new(0);
        let results: Vec<Optional<i32>> = vec![some(1), none(), some(2)]
            .into_iter()
            .map(otherwise_with::<i32, OptionalFamily, _>(|| {
                calls.set(calls.get() + 1);
                Some(9)
            }))
            .collect();
        assert_eq!(results, vec![some(1), some(9), some(2)]);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn or_and_or_else_extract() {
        let extracted: Vec<i32> = sample().into_iter().map(or(-1)).collect();
        assert_eq!(extracted, vec![2, -1, 3, -1]);
        let computed: Vec<i32> = sample().into_iter().map(or_else(|| 0)).collect();
        assert_eq!(computed, vec![2, 0, 3, 0]);
    }

    #[rstest]
    fn run_lifts_side_effects() {
        let total = Cell::new(0);
        let unchanged: Vec<Maybe<i32>> = sample()
            .into_iter()
            .map(run(|value: &i32| total.set(total.get() + value)))
            .collect();
        assert_eq!(unchanged, sample());
        assert_eq!(total.get(), 5);
    }

    #[rstest]
    fn lift_and_fold_see_sentinels() {
        let labels: Vec<&str> = sample()
            .into_iter()
            .map(fold::<i32, &str, MaybeFamily, _>(|raw: Raw<i32>| match raw {
                Raw::Present(_) => "present",
                Raw::Void => "void",
                Raw::Unset => "unset",
            }))
            .collect();
        assert_eq!(labels, vec!["present", "void", "present", "unset"]);

        let revived: Vec<Maybe<i32>> = sample()
            .into_iter()
            .map(lift::<i32, i32, MaybeFamily, _>(|raw: Raw<i32>| match raw {
                Raw::Void => Raw::Present(0),
                other => other,
            }))
            .collect();
        assert_eq!(revived, vec![just(2), just(0), just(3), nothing()]);
    }
}
