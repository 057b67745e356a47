//! Combinators used as building blocks for composition.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)
//! - [`negate`]: inverts a predicate
//! - [`fork`]: feeds one input to two functions and joins the results
//! - [`tap`]: runs a side effect and passes its input through
//! - [`compose2`]: right-to-left composition of two functions
//! - [`memoize`]: caches the results of a pure function by argument

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// The identity function.
///
/// # Examples
///
/// ```rust
/// use functional_core::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and returns a clone of `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// # Examples
///
/// ```rust
/// use functional_core::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Inverts a predicate.
///
/// # Examples
///
/// ```rust
/// use functional_core::compose::negate;
///
/// let is_empty = |text: &&str| text.is_empty();
/// let is_present = negate(is_empty);
/// assert!(is_present(&"alonzo"));
/// assert!(!is_present(&""));
/// ```
#[inline]
pub fn negate<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |value: &A| !predicate(value)
}

/// Applies two functions to the same input and combines their results.
///
/// `fork(join, first, second)(x) == join(first(&x), second(&x))`
///
/// # Examples
///
/// ```rust
/// use functional_core::compose::fork;
///
/// let average = fork(
///     |sum: u32, count: usize| f64::from(sum) / count as f64,
///     |grades: &Vec<u32>| grades.iter().sum(),
///     |grades: &Vec<u32>| grades.len(),
/// );
/// assert_eq!(average(vec![80, 90, 100]), 90.0);
/// ```
#[inline]
pub fn fork<A, B, C, D, J, F, G>(join: J, first: F, second: G) -> impl Fn(A) -> D
where
    J: Fn(B, C) -> D,
    F: Fn(&A) -> B,
    G: Fn(&A) -> C,
{
    move |value: A| join(first(&value), second(&value))
}

/// Runs `effect` on a borrowed input and returns the input unchanged.
///
/// Handy for logging in the middle of a `pipe!` chain.
#[inline]
pub fn tap<A, F>(effect: F) -> impl Fn(A) -> A
where
    F: Fn(&A),
{
    move |value: A| {
        effect(&value);
        value
    }
}

/// Composes two functions right to left: `compose2(f, g)(x) == f(g(x))`.
#[inline]
pub fn compose2<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Caches the results of `function` by argument.
///
/// The first call with a given argument runs `function` and stores a clone of
/// the result; later calls with an equal argument return the stored clone.
/// Only wrap pure functions: side effects in `function` happen once per
/// distinct argument.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use functional_core::compose::memoize;
///
/// let calls = Cell::new(0);
/// let square = memoize(|n: u64| {
///     calls.set(calls.get() + 1);
///     n * n
/// });
///
/// assert_eq!(square(12), 144);
/// assert_eq!(square(12), 144);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn memoize<A, B, F>(function: F) -> impl Fn(A) -> B
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    let cache: Rc<RefCell<HashMap<A, B>>> = Rc::new(RefCell::new(HashMap::new()));
    move |argument: A| {
        let cached = cache.borrow().get(&argument).cloned();
        if let Some(result) = cached {
            return result;
        }
        let result = function(argument.clone());
        cache.borrow_mut().insert(argument, result.clone());
        result
    }
}

/// Placeholder marker for [`partial!`](crate::partial).
///
/// The macro matches the `__` token literally; this constant exists so the
/// name resolves in documentation and editors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder value accepted by [`partial!`](crate::partial).
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn constant_ignores_argument() {
        let always_a = constant('a');
        assert_eq!(always_a(1), 'a');
        assert_eq!(always_a(2), 'a');
    }

    #[rstest]
    fn double_flip_is_identity() {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        let twice = flip(flip(power));
        assert_eq!(twice(2, 3), power(2, 3));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(1), true)]
    fn negate_of_is_null(#[case] input: Option<i32>, #[case] expected: bool) {
        let is_null = |value: &Option<i32>| value.is_none();
        assert_eq!(negate(is_null)(&input), expected);
    }

    #[rstest]
    fn fork_grades_to_letter() {
        let to_letter = |average: u32| match average {
            90.. => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            _ => 'F',
        };
        let grade = fork(
            move |sum: u32, count: u32| to_letter(sum / count),
            |grades: &Vec<u32>| grades.iter().sum(),
            |grades: &Vec<u32>| u32::try_from(grades.len()).unwrap_or(u32::MAX),
        );
        assert_eq!(grade(vec![80, 90, 100]), 'A');
        assert_eq!(grade(vec![70, 75]), 'C');
    }

    #[rstest]
    fn tap_passes_value_through() {
        let seen = RefCell::new(Vec::new());
        let logged = tap(|value: &i32| seen.borrow_mut().push(*value));
        assert_eq!(logged(3), 3);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[rstest]
    fn compose2_applies_inner_first() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(compose2(add_one, double)(5), 11);
    }

    #[rstest]
    fn memoize_runs_once_per_distinct_argument() {
        let calls = Cell::new(0);
        let shout = memoize(|name: String| {
            calls.set(calls.get() + 1);
            name.to_uppercase()
        });

        assert_eq!(shout("alonzo".to_string()), "ALONZO");
        assert_eq!(shout("alonzo".to_string()), "ALONZO");
        assert_eq!(calls.get(), 1);

        assert_eq!(shout("haskell".to_string()), "HASKELL");
        assert_eq!(calls.get(), 2);
    }
}
