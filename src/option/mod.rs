//! Option types: values that might be missing.
//!
//! Three families share one implementation, [`Opt<T, K>`]:
//!
//! | Family | Container | Present | Absent | Admits |
//! |---|---|---|---|---|
//! | Maybe | [`Maybe<T>`] | [`Just<T>`] | [`Nothing`] | Void and Unset |
//! | Nullable | [`Nullable<T>`] | [`Solum<T>`] / [`Only<T>`] | [`Nil`] | Void |
//! | Optional | [`Optional<T>`] | [`SomeValue<T>`] | [`NoneValue`] | Unset |
//!
//! Every chain operation (`onto`, `to`, `map`, `pick`, `pluck`, `that`, `which`,
//! `when`, `otherwise`, `or`, `run`, `lift`, `fold`) returns a new value of
//! the same family. The families never convert into one another implicitly;
//! go through [`Opt::value`] or [`Opt::into_option`] and re-wrap.
//!
//! Absent values are process-wide singletons per (family, sentinel) and are
//! shared by reference, so constructing "absent" never allocates.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{just, nothing, optional, Raw};
//!
//! assert_eq!(nothing::<i32>().otherwise(Raw::Present(5)), just(5));
//!
//! let is_positive = |value: &i32| *value > 0;
//! assert_eq!(optional::<i32>(None).that(is_positive).or(-1), -1);
//! ```

mod absence;
mod error;
mod family;
pub mod lift;
mod maybe;
mod nullable;
mod optional;

pub use absence::{Absence, Classify, Raw, is_absent, is_present, is_unset, is_void};
pub use error::InvariantViolation;
pub use family::{Absent, Family, Opt, Present};
pub use maybe::{Just, Maybe, MaybeFamily, Nothing, just, maybe, naught, nothing};
pub use nullable::{Nil, Nullable, NullableFamily, Only, Solum, nil, nullable, only, solum};
pub use optional::{NoneValue, Optional, OptionalFamily, SomeValue, none, optional, some};
