//! Property-based tests for the monad laws of every option family.
//!
//! - **Left Identity**: `unit(a).onto(f) == f(a)`
//! - **Right Identity**: `m.onto(unit) == m`
//! - **Associativity**: `m.onto(f).onto(g) == m.onto(|x| f(x).onto(g))`
//!
//! `unit` is the present constructor (`just`, `solum`, `some`); right
//! identity is also checked against the raw family constructor.

use perhaps::option::{
    Maybe, Nullable, Optional, Raw, just, maybe, naught, nil, none, nothing, nullable, optional,
    solum, some,
};
use proptest::prelude::*;

fn maybe_values() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        any::<i32>().prop_map(just),
        Just(naught()),
        Just(nothing()),
    ]
}

fn nullable_values() -> impl Strategy<Value = Nullable<i32>> {
    prop_oneof![any::<i32>().prop_map(solum), Just(nil())]
}

fn optional_values() -> impl Strategy<Value = Optional<i32>> {
    prop_oneof![any::<i32>().prop_map(some), Just(none())]
}

fn halve_maybe(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { just(value / 2) } else { naught() }
}

fn shrink_maybe(value: i32) -> Maybe<i32> {
    if value % 3 == 0 { nothing() } else { just(value.wrapping_sub(1)) }
}

fn halve_nullable(value: i32) -> Nullable<i32> {
    nullable((value % 2 == 0).then_some(value / 2))
}

fn shrink_nullable(value: i32) -> Nullable<i32> {
    nullable((value % 3 != 0).then(|| value.wrapping_sub(1)))
}

fn halve_optional(value: i32) -> Optional<i32> {
    optional((value % 2 == 0).then_some(value / 2))
}

fn shrink_optional(value: i32) -> Optional<i32> {
    optional((value % 3 != 0).then(|| value.wrapping_sub(1)))
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    /// Left Identity Law for Maybe
    #[test]
    fn prop_maybe_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(just(value).onto(halve_maybe), halve_maybe(value));
    }

    /// Right Identity Law for Maybe
    #[test]
    fn prop_maybe_right_identity_law(value in maybe_values()) {
        prop_assert_eq!(value.onto(just), value);
        prop_assert_eq!(value.onto(|x| maybe(Raw::Present(x))), value);
    }

    /// Associativity Law for Maybe
    #[test]
    fn prop_maybe_associativity_law(value in maybe_values()) {
        let left = value.onto(halve_maybe).onto(shrink_maybe);
        let right = value.onto(|x| halve_maybe(x).onto(shrink_maybe));
        prop_assert_eq!(left, right);
    }

    /// An absent input short-circuits with its own singleton
    #[test]
    fn prop_maybe_absent_onto_keeps_singleton(value in maybe_values()) {
        let bound = value.onto(halve_maybe);
        if let Some(absent) = value.absent() {
            prop_assert!(bound.absent().is_some_and(|result| std::ptr::eq(result, absent)));
        }
    }
}

// =============================================================================
// Nullable
// =============================================================================

proptest! {
    /// Left Identity Law for Nullable
    #[test]
    fn prop_nullable_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(solum(value).onto(halve_nullable), halve_nullable(value));
    }

    /// Right Identity Law for Nullable
    #[test]
    fn prop_nullable_right_identity_law(value in nullable_values()) {
        prop_assert_eq!(value.onto(solum), value);
        prop_assert_eq!(value.onto(|x| nullable(Some(x))), value);
    }

    /// Associativity Law for Nullable
    #[test]
    fn prop_nullable_associativity_law(value in nullable_values()) {
        let left = value.onto(halve_nullable).onto(shrink_nullable);
        let right = value.onto(|x| halve_nullable(x).onto(shrink_nullable));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Optional
// =============================================================================

proptest! {
    /// Left Identity Law for Optional
    #[test]
    fn prop_optional_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(some(value).onto(halve_optional), halve_optional(value));
    }

    /// Right Identity Law for Optional
    #[test]
    fn prop_optional_right_identity_law(value in optional_values()) {
        prop_assert_eq!(value.onto(some), value);
        prop_assert_eq!(value.onto(|x| optional(Some(x))), value);
    }

    /// Associativity Law for Optional
    #[test]
    fn prop_optional_associativity_law(value in optional_values()) {
        let left = value.onto(halve_optional).onto(shrink_optional);
        let right = value.onto(|x| halve_optional(x).onto(shrink_optional));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad trait
// =============================================================================

#[cfg(feature = "typeclass")]
mod monad_trait {
    use super::*;
    use perhaps::typeclass::{Applicative, Monad};

    proptest! {
        /// Left Identity Law through `pure`
        #[test]
        fn prop_pure_left_identity_law(value in any::<i32>()) {
            let lifted: Maybe<i32> = <Maybe<()>>::pure(value);
            prop_assert_eq!(lifted.flat_map(halve_maybe), halve_maybe(value));
        }

        /// Right Identity Law through `pure`
        #[test]
        fn prop_pure_right_identity_law(value in optional_values()) {
            prop_assert_eq!(value.flat_map(<Optional<()>>::pure), value);
        }
    }
}
