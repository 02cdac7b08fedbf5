//! Type class traits, implemented for every option family.
//!
//! - [`TypeConstructor`]: names "the same container with another payload"
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and combining independent options
//! - [`Monad`]: sequencing dependent options
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. The traits use Generic Associated
//! Types: `Maybe<i32>::WithType<String>` is `Maybe<String>`, and the family
//! marker is carried along so a Nullable never turns into an Optional.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::option::{solum, Nullable};
//! use perhaps::typeclass::{Applicative, Functor, Monad};
//!
//! let width: Nullable<u32> = solum(3);
//! let height: Nullable<u32> = solum(4);
//!
//! let area = width.map2(height, |w, h| w * h).fmap(|a| a * 2);
//! assert_eq!(area, solum(24));
//!
//! let checked = area.flat_map(|a| if a > 10 { solum(a) } else { <Nullable<()>>::pure(0) });
//! assert_eq!(checked, solum(24));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
