//! Error types for option construction.

use super::absence::Absence;

/// A present variant was asked to hold an absence sentinel.
///
/// Returned by [`Present::try_from_raw`](super::Present::try_from_raw).
/// This signals a broken contract in the caller, not bad user input, so the
/// value is never coerced into an absent variant.
///
/// # Examples
///
/// ```rust
/// use perhaps::option::{Absence, Just, Raw};
///
/// let error = Just::<i32>::try_from_raw(Raw::Void).unwrap_err();
/// assert_eq!(error.absence, Absence::Void);
/// assert_eq!(error.to_string(), "Just value must not be Void");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{variant} value must not be {absence}")]
pub struct InvariantViolation {
    /// The family whose present variant was constructed (`"Maybe"`, ...).
    pub family: &'static str,
    /// The present variant's name (`"Just"`, `"Solum"`, `"Some"`).
    pub variant: &'static str,
    /// The sentinel that was rejected.
    pub absence: Absence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_display() {
        let error = InvariantViolation {
            family: "Optional",
            variant: "Some",
            absence: Absence::Unset,
        };
        assert_eq!(format!("{error}"), "Some value must not be Unset");
    }

    #[test]
    fn test_invariant_violation_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_error: &E) {}
        let error = InvariantViolation {
            family: "Nullable",
            variant: "Solum",
            absence: Absence::Void,
        };
        assert_error(&error);
        assert!(std::error::Error::source(&error).is_none());
    }
}
