//! Nullary truth values.

/// A truth value that may be computed lazily.
///
/// Implemented for `bool` and for every `FnOnce() -> bool`, so call sites
/// accept either a constant or a deferred condition:
///
/// ```rust
/// use perhaps::predicate::Proposition;
///
/// assert!(true.holds());
/// assert!((|| 1 + 1 == 2).holds());
/// ```
pub trait Proposition {
    /// Evaluates the proposition.
    fn holds(self) -> bool;
}

impl Proposition for bool {
    #[inline]
    fn holds(self) -> bool {
        self
    }
}

impl<F> Proposition for F
where
    F: FnOnce() -> bool,
{
    #[inline]
    fn holds(self) -> bool {
        self()
    }
}

/// Returns `true` if the proposition holds.
#[inline]
pub fn is_true<P: Proposition>(proposition: P) -> bool {
    proposition.holds()
}

/// Returns `true` if the proposition does not hold.
#[inline]
pub fn is_false<P: Proposition>(proposition: P) -> bool {
    !proposition.holds()
}
