//! Structured exceptions.
//!
//! An [`Exception`] is a message template with `{{token}}` placeholders, a
//! context map filling them in, and an optional cause. It exists so that an
//! absent option can be turned into a descriptive failure at the one point
//! where a value is required:
//!
//! - [`panic`] returns a thunk that raises an exception as a panic payload,
//!   for [`Opt::or_else`](crate::option::Opt::or_else) and
//!   [`Opt::otherwise_with`](crate::option::Opt::otherwise_with). The option
//!   types only run such thunks on the absent path.
//! - [`throws`] is the `Result` form.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::exception::{exception, throws, Exception};
//! use perhaps::option::{nullable, Solum};
//!
//! fn find(id: u32) -> Result<Solum<&'static str>, Exception> {
//!     let row = if id == 1 { Some("alice") } else { None };
//!     nullable(row)
//!         .into_present()
//!         .or_else(|_| throws(exception("user {{id}} not found").with_context("id", id)))
//! }
//!
//! assert_eq!(find(1).map(Solum::into_inner), Ok("alice"));
//! assert_eq!(find(2).unwrap_err().to_string(), "user 2 not found");
//! ```

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Write as _;

/// A failure with a templated message, its context and an optional cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(.message, .context))]
pub struct Exception {
    message: String,
    context: BTreeMap<String, String>,
    #[source]
    previous: Option<Box<Exception>>,
}

impl Exception {
    /// Creates an exception without context or cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: BTreeMap::new(),
            previous: None,
        }
    }

    /// Converts any error, with its `source` chain, into an exception chain.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        if let Some(exception) = error.downcast_ref::<Self>() {
            return exception.clone();
        }
        Self {
            message: error.to_string(),
            context: BTreeMap::new(),
            previous: error.source().map(|source| Box::new(Self::from_error(source))),
        }
    }

    /// Sets the value substituted for `{{token}}` in the message.
    #[must_use]
    pub fn with_context(mut self, token: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(token.into(), value.to_string());
        self
    }

    /// Records the error that caused this exception.
    #[must_use]
    pub fn caused_by(mut self, previous: &(dyn Error + 'static)) -> Self {
        self.previous = Some(Box::new(Self::from_error(previous)));
        self
    }

    /// The message template, before substitution.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The substitution context.
    pub const fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// The exception that caused this one.
    pub fn previous(&self) -> Option<&Self> {
        self.previous.as_deref()
    }

    /// Iterates from this exception to its root cause.
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |exception| exception.previous())
    }

    /// Renders the whole chain, one exception per line, outermost first.
    pub fn trace(&self) -> String {
        let mut output = String::new();
        for (depth, exception) in self.chain().enumerate() {
            if depth > 0 {
                output.push('\n');
            }
            let _ = write!(output, "- {exception}");
        }
        output
    }
}

impl From<&str> for Exception {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Exception {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// Unknown tokens are left in place so a missing context entry stays visible.
fn render(message: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(start) = rest.find("{{") {
        let Some(length) = rest[start + 2..].find("}}") else {
            break;
        };
        let token = rest[start + 2..start + 2 + length].trim();
        rendered.push_str(&rest[..start]);
        match context.get(token) {
            Some(value) => rendered.push_str(value),
            None => rendered.push_str(&rest[start..start + 4 + length]),
        }
        rest = &rest[start + 4 + length..];
    }
    rendered.push_str(rest);
    rendered
}

/// Creates an [`Exception`].
pub fn exception(message: impl Into<String>) -> Exception {
    Exception::new(message)
}

/// Returns a thunk that raises `exception` as a panic payload.
///
/// The payload can be recovered with `std::panic::catch_unwind` and
/// `downcast_ref::<Exception>()`.
///
/// # Panics
///
/// The returned thunk always panics.
///
/// # Examples
///
/// ```rust
/// use perhaps::exception::{panic, Exception};
/// use perhaps::option::{just, nothing};
///
/// assert_eq!(just(1).or_else(panic("value required")), 1);
///
/// let payload = std::panic::catch_unwind(|| nothing::<i32>().or_else(panic("value required")))
///     .unwrap_err();
/// let raised = payload.downcast_ref::<Exception>().map(ToString::to_string);
/// assert_eq!(raised.as_deref(), Some("value required"));
/// ```
pub fn panic<T, E>(exception: E) -> impl FnOnce() -> T
where
    E: Into<Exception>,
{
    let exception = exception.into();
    move || {
        tracing::error!(exception = %exception, "raising exception");
        std::panic::panic_any(exception)
    }
}

/// Returns `Err(exception)`.
///
/// # Errors
///
/// Always returns the given exception.
pub fn throws<T, E>(exception: E) -> Result<T, Exception>
where
    E: Into<Exception>,
{
    Err(exception.into())
}
