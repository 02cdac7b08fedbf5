//! The Nullable family: admits only [`Absence::Void`].
//!
//! The raw representation is `Option<T>`, where `None` means Void. A Nullable
//! can therefore never observe `Unset`.

use super::absence::Absence;
use super::family::{Absent, Family, Opt, Present};

/// Family marker for [`Nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullableFamily;

/// A value that may have been cleared.
pub type Nullable<T> = Opt<T, NullableFamily>;

/// The narrowed present form of [`Nullable`].
pub type Solum<T> = Present<T, NullableFamily>;

/// Alias of [`Solum`].
pub type Only<T> = Solum<T>;

/// The absent singleton of [`Nullable`].
pub type Nil = Absent<NullableFamily>;

static NIL: Nil = Absent::new(Absence::Void);

impl Family for NullableFamily {
    type Raw<T> = Option<T>;

    const NAME: &'static str = "Nullable";
    const PRESENT: &'static str = "Solum";
    const ABSENT: &'static str = "Nil";

    #[inline]
    fn classify<T>(raw: Option<T>) -> Result<T, &'static Nil> {
        raw.ok_or(&NIL)
    }

    #[inline]
    fn present<T>(value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    fn vacant<T>(_absent: &'static Nil) -> Option<T> {
        None
    }

    #[inline]
    fn rejected() -> &'static Nil {
        &NIL
    }
}

/// Wraps an `Option`, mapping `None` to [`Nil`].
#[inline]
pub fn nullable<T>(raw: Option<T>) -> Nullable<T> {
    Opt::from_raw(raw)
}

/// Wraps a present payload. Raw `Option` input goes through [`nullable`].
#[inline]
pub const fn solum<T>(value: T) -> Nullable<T> {
    Opt::Present(value)
}

/// Alias of [`solum`].
#[inline]
pub const fn only<T>(value: T) -> Nullable<T> {
    solum(value)
}

/// The [`Nil`] singleton.
#[inline]
pub fn nil<T>() -> Nullable<T> {
    Opt::Absent(&NIL)
}

impl<T> From<Option<T>> for Nullable<T> {
    #[inline]
    fn from(raw: Option<T>) -> Self {
        nullable(raw)
    }
}
