//! The Maybe family: admits both [`Absence::Void`] and [`Absence::Unset`].
//!
//! | Variant | Rust |
//! |---|---|
//! | container | [`Maybe<T>`] |
//! | present | [`Just<T>`] / `Opt::Present` |
//! | absent | [`Nothing`], two singletons returned by [`naught`] and [`nothing`] |
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{maybe, nothing, Absence, Raw};
//!
//! assert_eq!(maybe(Raw::Present(5)).map(|value| value * 2).or(0), 10);
//! assert_eq!(maybe::<i32>(Raw::Void).absence(), Some(Absence::Void));
//! assert_eq!(nothing::<i32>().otherwise(Raw::Present(5)).or(0), 5);
//! ```

use super::absence::{Absence, Raw};
use super::family::{Absent, Family, Opt, Present};

/// Family marker for [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaybeFamily;

/// A value that may be missing for either reason.
pub type Maybe<T> = Opt<T, MaybeFamily>;

/// The narrowed present form of [`Maybe`].
pub type Just<T> = Present<T, MaybeFamily>;

/// The absent singletons of [`Maybe`].
pub type Nothing = Absent<MaybeFamily>;

static NAUGHT: Nothing = Absent::new(Absence::Void);
static NOTHING: Nothing = Absent::new(Absence::Unset);

impl Family for MaybeFamily {
    type Raw<T> = Raw<T>;

    const NAME: &'static str = "Maybe";
    const PRESENT: &'static str = "Just";
    const ABSENT: &'static str = "Nothing";

    #[inline]
    fn classify<T>(raw: Raw<T>) -> Result<T, &'static Nothing> {
        match raw {
            Raw::Present(value) => Ok(value),
            Raw::Void => Err(&NAUGHT),
            Raw::Unset => Err(&NOTHING),
        }
    }

    #[inline]
    fn present<T>(value: T) -> Raw<T> {
        Raw::Present(value)
    }

    #[inline]
    fn vacant<T>(absent: &'static Nothing) -> Raw<T> {
        Raw::from_absence(absent.absence())
    }

    #[inline]
    fn rejected() -> &'static Nothing {
        &NOTHING
    }
}

/// Classifies a raw value into `Just` or the matching `Nothing`.
#[inline]
pub fn maybe<T>(raw: Raw<T>) -> Maybe<T> {
    Opt::from_raw(raw)
}

/// Wraps a present payload.
///
/// The payload is taken as is, so `just(Raw::Void)` is a `Just` holding a
/// raw value. Use [`maybe`] or [`Present::try_from_raw`] to classify raw
/// input.
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Opt::Present(value)
}

/// The `Nothing` carrying [`Absence::Unset`].
#[inline]
pub fn nothing<T>() -> Maybe<T> {
    Opt::Absent(&NOTHING)
}

/// The `Nothing` carrying [`Absence::Void`].
#[inline]
pub fn naught<T>() -> Maybe<T> {
    Opt::Absent(&NAUGHT)
}

impl<T> From<Raw<T>> for Maybe<T> {
    #[inline]
    fn from(raw: Raw<T>) -> Self {
        maybe(raw)
    }
}
