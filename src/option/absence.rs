//! The two absence sentinels and raw-value classification.
//!
//! A raw value is exactly one of: present, [`Absence::Void`] or
//! [`Absence::Unset`]. [`Raw`] is the general raw representation used by the
//! Maybe family; Nullable and Optional use `Option<T>` and fix the meaning of
//! `None` to one sentinel each.

use std::fmt;

/// A reason a value is missing.
///
/// `Void` marks a value that was explicitly emptied, `Unset` one that was
/// never provided. The two are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Absence {
    /// The value was deliberately cleared.
    Void,
    /// The value was never provided.
    Unset,
}

impl Absence {
    /// Returns `true` for [`Absence::Void`].
    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns `true` for [`Absence::Unset`].
    #[inline]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for Absence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => formatter.write_str("Void"),
            Self::Unset => formatter.write_str("Unset"),
        }
    }
}

/// A possibly-absent raw value admitting both sentinels.
///
/// # Examples
///
/// ```rust
/// use perhaps::option::{Absence, Raw};
///
/// let present: Raw<i32> = Raw::Present(1);
/// assert_eq!(present.absence(), None);
///
/// let cleared: Raw<i32> = Raw::from_absence(Absence::Void);
/// assert_eq!(cleared, Raw::Void);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Raw<T> {
    /// A real payload.
    Present(T),
    /// The [`Absence::Void`] sentinel.
    Void,
    /// The [`Absence::Unset`] sentinel.
    Unset,
}

impl<T> Raw<T> {
    /// Builds the raw form of a sentinel.
    #[inline]
    pub const fn from_absence(absence: Absence) -> Self {
        match absence {
            Absence::Void => Self::Void,
            Absence::Unset => Self::Unset,
        }
    }

    /// Returns the sentinel, or `None` for a present payload.
    #[inline]
    pub const fn absence(&self) -> Option<Absence> {
        match self {
            Self::Present(_) => None,
            Self::Void => Some(Absence::Void),
            Self::Unset => Some(Absence::Unset),
        }
    }

    /// Splits the raw value into its payload or its sentinel.
    #[inline]
    pub fn into_result(self) -> Result<T, Absence> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Void => Err(Absence::Void),
            Self::Unset => Err(Absence::Unset),
        }
    }

    /// Returns a raw value borrowing the payload.
    #[inline]
    pub const fn as_ref(&self) -> Raw<&T> {
        match self {
            Self::Present(value) => Raw::Present(value),
            Self::Void => Raw::Void,
            Self::Unset => Raw::Unset,
        }
    }
}

/// Anything that can be classified as present or as one of the sentinels.
pub trait Classify {
    /// Returns the sentinel carried by `self`, or `None` when present.
    fn absence(&self) -> Option<Absence>;
}

impl<T> Classify for Raw<T> {
    #[inline]
    fn absence(&self) -> Option<Absence> {
        Self::absence(self)
    }
}

impl Classify for Absence {
    #[inline]
    fn absence(&self) -> Option<Absence> {
        Some(*self)
    }
}

impl Classify for Option<Absence> {
    #[inline]
    fn absence(&self) -> Option<Absence> {
        *self
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    #[inline]
    fn absence(&self) -> Option<Absence> {
        (**self).absence()
    }
}

/// Returns `true` when the value is present.
#[inline]
pub fn is_present<C: Classify + ?Sized>(value: &C) -> bool {
    value.absence().is_none()
}

/// Returns `true` when the value is the [`Absence::Void`] sentinel.
#[inline]
pub fn is_void<C: Classify + ?Sized>(value: &C) -> bool {
    value.absence() == Some(Absence::Void)
}

/// Returns `true` when the value is the [`Absence::Unset`] sentinel.
#[inline]
pub fn is_unset<C: Classify + ?Sized>(value: &C) -> bool {
    value.absence() == Some(Absence::Unset)
}

/// Returns `true` when the value is either sentinel.
#[inline]
pub fn is_absent<C: Classify + ?Sized>(value: &C) -> bool {
    value.absence().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Raw::Present(1), true, false, false)]
    #[case(Raw::Void, false, true, false)]
    #[case(Raw::Unset, false, false, true)]
    fn raw_is_classified_into_exactly_one_kind(
        #[case] raw: Raw<i32>,
        #[case] present: bool,
        #[case] void: bool,
        #[case] unset: bool,
    ) {
        assert_eq!(is_present(&raw), present);
        assert_eq!(is_void(&raw), void);
        assert_eq!(is_unset(&raw), unset);
        assert_eq!(is_absent(&raw), void || unset);
    }

    #[rstest]
    fn sentinels_are_distinct() {
        assert_ne!(Absence::Void, Absence::Unset);
        assert_ne!(Raw::<i32>::Void, Raw::Unset);
    }

    #[rstest]
    #[case(Absence::Void)]
    #[case(Absence::Unset)]
    fn from_absence_round_trips(#[case] absence: Absence) {
        let raw: Raw<()> = Raw::from_absence(absence);
        assert_eq!(raw.absence(), Some(absence));
        assert_eq!(raw.into_result(), Err(absence));
        assert!(is_absent(&absence));
    }

    #[rstest]
    fn missing_absence_classifies_as_present() {
        let absence: Option<Absence> = None;
        assert!(is_present(&absence));
        assert!(is_unset(&Some(Absence::Unset)));
    }

    #[rstest]
    fn absence_displays_its_name() {
        assert_eq!(Absence::Void.to_string(), "Void");
        assert_eq!(Absence::Unset.to_string(), "Unset");
    }
}
