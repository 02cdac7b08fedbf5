//! The shared option algorithm.
//!
//! Every option family is the same tagged union, [`Opt<T, K>`], specialised
//! by a [`Family`] marker `K`. The marker decides three things only:
//!
//! 1. the raw representation of a possibly-absent value ([`Family::Raw`]),
//! 2. which memoized [`Absent`] singleton a raw absence maps to,
//! 3. the names used in diagnostics and in [`InvariantViolation`].
//!
//! Every chain operation below is written once and shared by Maybe, Nullable
//! and Optional.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

use super::absence::{Absence, Classify};
use super::error::InvariantViolation;
use crate::predicate::Proposition;

/// A family of option types: a raw representation plus its absent singletons.
///
/// Implementors are zero-sized markers. See
/// [`MaybeFamily`](super::MaybeFamily), [`NullableFamily`](super::NullableFamily)
/// and [`OptionalFamily`](super::OptionalFamily).
pub trait Family: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + 'static {
    /// The raw, possibly-absent representation of a `T` in this family.
    type Raw<T>;

    /// Family name used in diagnostics (`"Maybe"`).
    const NAME: &'static str;

    /// Present variant name (`"Just"`).
    const PRESENT: &'static str;

    /// Absent variant name (`"Nothing"`).
    const ABSENT: &'static str;

    /// Routes a raw value to its payload or to the matching absent singleton.
    ///
    /// # Errors
    ///
    /// Returns the memoized singleton when `raw` is an absence.
    fn classify<T>(raw: Self::Raw<T>) -> Result<T, &'static Absent<Self>>;

    /// Builds the raw form of a present payload.
    fn present<T>(value: T) -> Self::Raw<T>;

    /// Builds the raw form of an absent singleton.
    fn vacant<T>(absent: &'static Absent<Self>) -> Self::Raw<T>;

    /// The singleton produced when a filter rejects a present payload.
    fn rejected() -> &'static Absent<Self>;
}

// =============================================================================
// Absent
// =============================================================================

/// The payload-free absent variant of family `K`.
///
/// Instances only exist as `static` singletons, one per admitted sentinel, and
/// are handed out as `&'static Absent<K>`. Because the type does not mention
/// the payload type, every `Opt<_, K>` carrying the same sentinel points at
/// the same singleton.
pub struct Absent<K> {
    absence: Absence,
    family: PhantomData<fn() -> K>,
}

impl<K> Absent<K> {
    pub(crate) const fn new(absence: Absence) -> Self {
        Self {
            absence,
            family: PhantomData,
        }
    }

    /// The sentinel this singleton stands for.
    #[inline]
    pub const fn absence(&self) -> Absence {
        self.absence
    }

    /// Returns `true` if this singleton stands for [`Absence::Void`].
    #[inline]
    pub const fn is_void(&self) -> bool {
        self.absence.is_void()
    }

    /// Returns `true` if this singleton stands for [`Absence::Unset`].
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.absence.is_unset()
    }
}

impl<K: Family> Absent<K> {
    /// Returns the raw representation of this absence.
    #[inline]
    pub fn to_raw<T>(&'static self) -> K::Raw<T> {
        K::vacant(self)
    }

    /// Wraps this singleton as an option of any payload type.
    #[inline]
    pub const fn to_opt<T>(&'static self) -> Opt<T, K> {
        Opt::Absent(self)
    }
}

impl<K: Family> fmt::Debug for Absent<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple(K::ABSENT)
            .field(&self.absence)
            .finish()
    }
}

// Singletons are unique per (family, sentinel), so comparing the sentinel is
// the same as comparing addresses.
impl<K> PartialEq for Absent<K> {
    fn eq(&self, other: &Self) -> bool {
        self.absence == other.absence
    }
}

impl<K> Eq for Absent<K> {}

impl<K> Hash for Absent<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absence.hash(state);
    }
}

// =============================================================================
// Present
// =============================================================================

/// The narrowed, present-only form of an option of family `K`.
///
/// A `Present` always holds a payload. Values are obtained either statically
/// with [`Present::new`], by checking a raw value with
/// [`Present::try_from_raw`], or by narrowing an [`Opt`] with
/// [`Opt::into_present`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present<T, K> {
    value: T,
    family: PhantomData<fn() -> K>,
}

impl<T, K: Family> Present<T, K> {
    /// Wraps a payload. The type system already guarantees presence.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            family: PhantomData,
        }
    }

    /// Wraps a raw value, refusing absences.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] if `raw` is one of the family's
    /// absence sentinels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{Solum, SomeValue};
    ///
    /// assert_eq!(Solum::try_from_raw(Some(3)).map(|solum| solum.into_inner()), Ok(3));
    ///
    /// let error = SomeValue::<i32>::try_from_raw(None).unwrap_err();
    /// assert_eq!(error.to_string(), "Some value must not be Unset");
    /// ```
    pub fn try_from_raw(raw: K::Raw<T>) -> Result<Self, InvariantViolation> {
        match K::classify(raw) {
            Ok(value) => Ok(Self::new(value)),
            Err(absent) => {
                tracing::warn!(
                    family = K::NAME,
                    variant = K::PRESENT,
                    absence = %absent.absence(),
                    "present variant refused an absent value"
                );
                Err(InvariantViolation {
                    family: K::NAME,
                    variant: K::PRESENT,
                    absence: absent.absence(),
                })
            }
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwraps the payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Maps the payload, staying present.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Present<U, K>
    where
        F: FnOnce(T) -> U,
    {
        Present::new(function(self.value))
    }

    /// Binds the payload.
    #[inline]
    pub fn onto<U, F>(self, function: F) -> Opt<U, K>
    where
        F: FnOnce(T) -> Opt<U, K>,
    {
        function(self.value)
    }

    /// Runs a side effect on the payload and returns `self`.
    #[inline]
    #[must_use]
    pub fn run<P>(self, procedure: P) -> Self
    where
        P: FnOnce(&T),
    {
        procedure(&self.value);
        self
    }

    /// Returns the raw representation of the payload.
    #[inline]
    pub fn value(self) -> K::Raw<T> {
        K::present(self.value)
    }
}

impl<T: fmt::Debug, K: Family> fmt::Debug for Present<T, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple(K::PRESENT).field(&self.value).finish()
    }
}

impl<T, K: Family> From<Present<T, K>> for Opt<T, K> {
    #[inline]
    fn from(present: Present<T, K>) -> Self {
        Self::Present(present.value)
    }
}

impl<T, K: Family> From<&'static Absent<K>> for Opt<T, K> {
    #[inline]
    fn from(absent: &'static Absent<K>) -> Self {
        absent.to_opt()
    }
}

// =============================================================================
// Opt
// =============================================================================

/// A value of type `T` that may be missing, in family `K`.
///
/// Use the family aliases [`Maybe`](super::Maybe),
/// [`Nullable`](super::Nullable) and [`Optional`](super::Optional) rather
/// than naming `Opt` directly.
///
/// All operations consume `self` and return a new value; none mutate.
/// Operations on an absent value short-circuit and carry the same
/// `&'static Absent<K>` forward, so the sentinel is preserved.
///
/// # Examples
///
/// ```rust
/// use perhaps::option::{maybe, Raw};
///
/// let doubled = maybe(Raw::Present(5)).map(|value| value * 2).or(0);
/// assert_eq!(doubled, 10);
///
/// let missing = maybe::<i32>(Raw::Void).map(|value| value * 2).or(0);
/// assert_eq!(missing, 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opt<T, K: 'static> {
    /// Holds a payload.
    Present(T),
    /// Points at one of the family's absent singletons.
    Absent(&'static Absent<K>),
}

impl<T, K: Family> Opt<T, K> {
    // =========================================================================
    // Construction and inspection
    // =========================================================================

    /// Builds an option from the family's raw representation.
    #[inline]
    pub fn from_raw(raw: K::Raw<T>) -> Self {
        match K::classify(raw) {
            Ok(value) => Self::Present(value),
            Err(absent) => Self::Absent(absent),
        }
    }

    /// Returns `true` for the present variant.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for the absent variant.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    /// Returns the sentinel of an absent option.
    #[inline]
    pub const fn absence(&self) -> Option<Absence> {
        match self {
            Self::Present(_) => None,
            Self::Absent(absent) => Some(absent.absence()),
        }
    }

    /// Returns the absent singleton, if any.
    #[inline]
    pub const fn absent(&self) -> Option<&'static Absent<K>> {
        match self {
            Self::Present(_) => None,
            Self::Absent(absent) => Some(*absent),
        }
    }

    /// Borrows the payload, keeping absences as they are.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T, K> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent(absent) => Opt::Absent(*absent),
        }
    }

    /// Returns the raw value: the payload or the family's sentinel.
    #[inline]
    pub fn value(self) -> K::Raw<T> {
        match self {
            Self::Present(value) => K::present(value),
            Self::Absent(absent) => absent.to_raw(),
        }
    }

    /// Discards the sentinel and converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Narrows to the present form.
    ///
    /// # Errors
    ///
    /// Returns the absent singleton when there is no payload.
    #[inline]
    pub fn into_present(self) -> Result<Present<T, K>, &'static Absent<K>> {
        match self {
            Self::Present(value) => Ok(Present::new(value)),
            Self::Absent(absent) => Err(absent),
        }
    }

    /// Narrows to the present form for callers that already know the value
    /// is present.
    ///
    /// # Panics
    ///
    /// Panics if the option is absent.
    #[inline]
    #[track_caller]
    pub fn unwrap_present(self) -> Present<T, K> {
        match self {
            Self::Present(value) => Present::new(value),
            Self::Absent(absent) => panic!(
                "called `unwrap_present()` on a `{}({})` value",
                K::ABSENT,
                absent.absence()
            ),
        }
    }

    // =========================================================================
    // Chain operations
    // =========================================================================

    /// Monadic bind. The function's result is returned as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{just, nothing};
    ///
    /// let halve = |value: i32| if value % 2 == 0 { just(value / 2) } else { nothing() };
    /// assert_eq!(just(8).onto(halve), just(4));
    /// assert_eq!(just(3).onto(halve), nothing());
    /// ```
    #[inline]
    pub fn onto<U, F>(self, function: F) -> Opt<U, K>
    where
        F: FnOnce(T) -> Opt<U, K>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent(absent) => Opt::Absent(absent),
        }
    }

    /// Maps the payload to a raw value and re-wraps it through the family
    /// constructor, so a raw absence downgrades the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::nullable;
    ///
    /// let parsed = nullable(Some("42")).to(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed.or(0), 42);
    ///
    /// let rejected = nullable(Some("x")).to(|text| text.parse::<i32>().ok());
    /// assert!(rejected.is_absent());
    /// ```
    #[inline]
    pub fn to<U, F>(self, function: F) -> Opt<U, K>
    where
        F: FnOnce(T) -> K::Raw<U>,
    {
        match self {
            Self::Present(value) => Opt::from_raw(function(value)),
            Self::Absent(absent) => Opt::Absent(absent),
        }
    }

    /// Maps the payload. The result is present whenever `self` is.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U, K>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Opt::Present(function(value)),
            Self::Absent(absent) => Opt::Absent(absent),
        }
    }

    /// Folds the raw value, present or absent, into a result.
    #[doc(alias = "into")]
    #[inline]
    pub fn fold<U, F>(self, function: F) -> U
    where
        F: FnOnce(K::Raw<T>) -> U,
    {
        function(self.value())
    }

    /// Reads an indexed element that is itself a raw value of the family and
    /// re-wraps it, so an absent element makes the result absent.
    ///
    /// This is `to(|value| value[key].clone())`. Indexing follows `T`'s
    /// [`Index`] implementation, including any panic on a missing key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{nil, solum, Nullable};
    ///
    /// let row = solum(vec![Some(1), None]);
    /// assert_eq!(row.clone().pick(0_usize), solum(1));
    ///
    /// let missing: Nullable<i32> = row.pick(1_usize);
    /// assert_eq!(missing, nil());
    /// ```
    #[inline]
    pub fn pick<U, Q>(self, key: Q) -> Opt<U, K>
    where
        T: Index<Q, Output = K::Raw<U>>,
        K::Raw<U>: Clone,
    {
        self.to(|value| value[key].clone())
    }

    /// Maps the payload to one of its indexed elements, which is taken as a
    /// plain present payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::just;
    /// use std::collections::HashMap;
    ///
    /// let scores = HashMap::from([("alice", 3)]);
    /// assert_eq!(just(scores).pluck("alice").or(0), 3);
    /// ```
    #[inline]
    pub fn pluck<Q>(self, key: Q) -> Opt<T::Output, K>
    where
        T: Index<Q>,
        T::Output: Sized + Clone,
    {
        self.map(|value| value[key].clone())
    }

    /// Keeps the payload when the predicate passes, otherwise returns the
    /// family's rejection singleton. Absent input is returned unchanged.
    #[inline]
    #[must_use]
    pub fn that<P>(self, filter: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if filter(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent(K::rejected())
                }
            }
            absent @ Self::Absent(_) => absent,
        }
    }

    /// Narrows the payload into a refined type.
    ///
    /// `Ok` keeps the narrowed payload, `Err` yields the family's rejection
    /// singleton. Any `TryFrom` conversion fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::just;
    ///
    /// let small = just(300_i32).which(u8::try_from);
    /// assert!(small.is_absent());
    /// assert_eq!(just(30_i32).which(u8::try_from).or(0), 30_u8);
    /// ```
    #[inline]
    pub fn which<U, E, N>(self, narrow: N) -> Opt<U, K>
    where
        N: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Present(value) => match narrow(value) {
                Ok(narrowed) => Opt::Present(narrowed),
                Err(_) => Opt::Absent(K::rejected()),
            },
            Self::Absent(absent) => Opt::Absent(absent),
        }
    }

    /// Like [`that`](Self::that), but the condition ignores the payload.
    /// A deferred condition is not evaluated on absent input.
    #[inline]
    #[must_use]
    pub fn when<P>(self, condition: P) -> Self
    where
        P: Proposition,
    {
        match self {
            Self::Present(value) => {
                if condition.holds() {
                    Self::Present(value)
                } else {
                    Self::Absent(K::rejected())
                }
            }
            absent @ Self::Absent(_) => absent,
        }
    }

    /// Replaces an absent value with `fallback`, re-wrapped through the family
    /// constructor. A present value ignores the fallback.
    #[inline]
    #[must_use]
    pub fn otherwise(self, fallback: K::Raw<T>) -> Self {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent(_) => Self::from_raw(fallback),
        }
    }

    /// Lazy [`otherwise`](Self::otherwise): `fallback` runs only when `self`
    /// is absent. A panicking thunk is the "or fail" idiom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{just, Raw};
    ///
    /// let value = just(1).otherwise_with(|| panic!("never evaluated"));
    /// assert_eq!(value.value(), Raw::Present(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn otherwise_with<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> K::Raw<T>,
    {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent(_) => Self::from_raw(fallback()),
        }
    }

    /// Extracts the payload or returns `fallback`.
    #[inline]
    pub fn or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => fallback,
        }
    }

    /// Extracts the payload or computes a fallback. `fallback` runs only when
    /// `self` is absent.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => fallback(),
        }
    }

    /// Runs a side effect on the payload, if any, and returns `self`.
    #[inline]
    #[must_use]
    pub fn run<P>(self, procedure: P) -> Self
    where
        P: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            procedure(value);
        }
        self
    }

    /// Maps the raw value, absences included, and re-wraps the result.
    ///
    /// Unlike [`to`](Self::to), `function` also runs on absent input and sees
    /// the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::option::{maybe, naught, Raw};
    ///
    /// let described = naught::<i32>().lift(|raw| match raw {
    ///     Raw::Present(value) => Raw::Present(value.to_string()),
    ///     Raw::Void => Raw::Present("cleared".to_string()),
    ///     Raw::Unset => Raw::Unset,
    /// });
    /// assert_eq!(described, maybe(Raw::Present("cleared".to_string())));
    /// ```
    #[inline]
    pub fn lift<U, F>(self, function: F) -> Opt<U, K>
    where
        F: FnOnce(K::Raw<T>) -> K::Raw<U>,
    {
        Opt::from_raw(function(self.value()))
    }
}

impl<T, K: Family> Classify for Opt<T, K> {
    #[inline]
    fn absence(&self) -> Option<Absence> {
        Self::absence(self)
    }
}

impl<T: fmt::Debug, K: Family> fmt::Debug for Opt<T, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple(K::PRESENT).field(value).finish(),
            Self::Absent(absent) => fmt::Debug::fmt(absent, formatter),
        }
    }
}
