//! # perhaps
//!
//! Option types for Rust that keep track of *how* a value is missing.
//!
//! ## Overview
//!
//! Many data sources distinguish two kinds of "no value": an explicit empty
//! marker (a database `NULL`, a JSON `null`) and a value that was never set
//! at all (a missing key). This library models both as [`option::Absence`]
//! sentinels, `Void` and `Unset`, and offers three option families on top of
//! one generic container:
//!
//! - **Maybe**: admits both sentinels and preserves which one was seen
//! - **Nullable**: admits only `Void`, with `Option<T>` as its raw form
//! - **Optional**: admits only `Unset`, with `Option<T>` as its raw form
//!
//! Each family offers the same chain: `onto`, `to`, `map`, `pick`, `pluck`, `that`,
//! `which`, `when`, `otherwise`, `or`, `run`, `lift`, and `fold`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative` and `Monad` implementations
//! - `exception`: structured exceptions for failing on absent values
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use perhaps::prelude::*;
//!
//! let port: Maybe<&str> = maybe(Raw::Present("8080"));
//! let parsed = port
//!     .to(|text| text.parse::<u16>().map_or(Raw::Void, Raw::Present))
//!     .that(|port: &u16| *port >= 1024)
//!     .or(80);
//! assert_eq!(parsed, 8080);
//!
//! let missing: Maybe<u16> = naught();
//! assert_eq!(missing.absence(), Some(Absence::Void));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the option families, their constructors, and the enabled
/// feature modules.
///
/// # Usage
///
/// ```rust
/// use perhaps::prelude::*;
///
/// assert_eq!(solum(1).map(|n| n + 1), solum(2));
/// ```
pub mod prelude {
    pub use crate::option::{
        Absence, Absent, Classify, Family, Just, Maybe, Nil, NoneValue, Nothing, Nullable, Only,
        Opt, Optional, Present, Raw, Solum, SomeValue, just, maybe, naught, nil, none, nothing,
        nullable, only, optional, solum, some,
    };
    pub use crate::predicate::Proposition;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "exception")]
    pub use crate::exception::{Exception, exception, throws};
}

pub mod function;
pub mod option;
pub mod predicate;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "exception")]
pub mod exception;
