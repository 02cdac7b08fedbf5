//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] uses a GAT to name "the same container, holding a
//! different payload", which is what [`Functor`](super::Functor) and
//! [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use perhaps::option::{just, Maybe};
//! use perhaps::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let retyped: Option<Maybe<String>> = emptied(just(42));
//! assert!(retyped.is_none());
//! ```

use crate::option::{Family, Opt};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the payload type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type, `i32` for `Maybe<i32>`.
    type Inner;

    /// The same constructor applied to `B`; for `Maybe<i32>`, `WithType<String>`
    /// is `Maybe<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// The family marker is kept, so retyping never crosses families.
impl<T, K: Family> TypeConstructor for Opt<T, K> {
    type Inner = T;
    type WithType<B> = Opt<B, K>;
}
