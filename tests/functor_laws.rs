#![cfg(all(feature = "control", feature = "effect"))]
//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Checked for `Wrapper`, `Maybe`, `Either` and `Option`, and for `IO` by
//! comparing run results.

use functional_core::control::{Either, Maybe, Wrapper};
use functional_core::effect::IO;
use functional_core::typeclass::Functor;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Wrapper
// =============================================================================

proptest! {
    #[test]
    fn prop_wrapper_identity_law(value in any::<i32>()) {
        let wrapped = Wrapper::of(value);
        prop_assert_eq!(wrapped.fmap(|x| x), wrapped);
    }

    #[test]
    fn prop_wrapper_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Wrapper::of(value).fmap(function1).fmap(function2);
        let right = Wrapper::of(value).fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_wrapper_string_composition_law(value in any::<String>()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(3);

        let left = Wrapper::of(value.clone()).map(function1).map(function2);
        let right = Wrapper::of(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| n.wrapping_add(11);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_left_is_untouched(error in any::<String>()) {
        let left: Either<String, i32> = Either::left(error.clone());
        prop_assert_eq!(left.fmap(|n| n + 1), Either::left(error));
    }
}

// =============================================================================
// Option
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }
}

// =============================================================================
// IO
// =============================================================================

proptest! {
    #[test]
    fn prop_io_identity_law(value in any::<i32>()) {
        let io = IO::of(value);
        prop_assert_eq!(io.clone().map(|x| x).run(), io.run());
    }

    #[test]
    fn prop_io_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = IO::of(value).map(function1).map(function2);
        let right = IO::of(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(), right.run());
    }
}
