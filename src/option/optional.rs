//! The Optional family: admits only [`Absence::Unset`].
//!
//! The raw representation is `Option<T>`, where `None` means Unset. The
//! variant aliases are [`SomeValue`] and [`NoneValue`] so they do not shadow
//! the prelude's `Some` and `None`.

use super::absence::Absence;
use super::family::{Absent, Family, Opt, Present};

/// Family marker for [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionalFamily;

/// A value that may not have been provided.
pub type Optional<T> = Opt<T, OptionalFamily>;

/// The narrowed present form of [`Optional`].
pub type SomeValue<T> = Present<T, OptionalFamily>;

/// The absent singleton of [`Optional`].
pub type NoneValue = Absent<OptionalFamily>;

static NONE: NoneValue = Absent::new(Absence::Unset);

impl Family for OptionalFamily {
    type Raw<T> = Option<T>;

    const NAME: &'static str = "Optional";
    const PRESENT: &'static str = "Some";
    const ABSENT: &'static str = "None";

    #[inline]
    fn classify<T>(raw: Option<T>) -> Result<T, &'static NoneValue> {
        raw.ok_or(&NONE)
    }

    #[inline]
    fn present<T>(value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    fn vacant<T>(_absent: &'static NoneValue) -> Option<T> {
        None
    }

    #[inline]
    fn rejected() -> &'static NoneValue {
        &NONE
    }
}

/// Wraps an `Option`, mapping `None` to [`NoneValue`].
#[inline]
pub fn optional<T>(raw: Option<T>) -> Optional<T> {
    Opt::from_raw(raw)
}

/// Wraps a present payload. Raw `Option` input goes through [`optional`].
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Opt::Present(value)
}

/// The [`NoneValue`] singleton.
#[inline]
pub fn none<T>() -> Optional<T> {
    Opt::Absent(&NONE)
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(raw: Option<T>) -> Self {
        optional(raw)
    }
}
