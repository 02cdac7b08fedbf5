//! Boolean-valued functions and their combinators.
//!
//! - [`Predicate`]: a function from `&T` to `bool`
//! - [`Proposition`]: a nullary truth value, either a plain `bool` or a
//!   `FnOnce() -> bool` evaluated on demand
//! - [`not`], [`and`], [`or`], [`all`], [`any`]: predicate combinators
//!
//! The option types use predicates for [`Opt::that`](crate::option::Opt::that)
//! and propositions for [`Opt::when`](crate::option::Opt::when).
//!
//! # Examples
//!
//! ```rust
//! use perhaps::predicate::{and, not};
//!
//! let is_positive = |value: &i32| *value > 0;
//! let is_even = |value: &i32| value % 2 == 0;
//!
//! let positive_odd = and(is_positive, not(is_even));
//! assert!(positive_odd(&3));
//! assert!(!positive_odd(&4));
//! ```

mod combinators;
mod proposition;

pub use combinators::{Predicate, all, and, any, not, or};
pub use proposition::{Proposition, is_false, is_true};
