//! Wrapper - the identity functor - and the `Empty` sentinel.
//!
//! [`Wrapper<A>`] always holds exactly one value. Mapping a function over it
//! produces a new wrapper; the original is never touched. It is the smallest
//! container that satisfies the functor and monad laws, and the starting
//! point for every other container in this crate.
//!
//! [`Empty`] is a deliberate "no value" marker. Unlike `Maybe::Nothing` it is
//! not part of any monad: mapping over it is a no-op that never calls the
//! function. [`Container<A>`] is the closed sum of the two, for functions that
//! return either a wrapped value or the empty marker.
//!
//! # Examples
//!
//! ```rust
//! use functional_core::control::{Container, empty, wrap};
//!
//! assert_eq!(wrap("Get Functional").map(str::to_uppercase), wrap("GET FUNCTIONAL".to_string()));
//!
//! fn half(value: i32) -> Container<i32> {
//!     if value % 2 == 0 { wrap(value / 2).into() } else { empty().into() }
//! }
//!
//! assert_eq!(half(4), Container::from(wrap(2)));
//! assert_eq!(half(3), Container::Empty);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A container holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use functional_core::control::Wrapper;
///
/// let wrapped = Wrapper::of(10).map(|n| n * 2);
/// assert_eq!(wrapped.into_inner(), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wrapper<A>(A);

/// Wraps a value. Shorthand for [`Wrapper::of`].
#[inline]
pub const fn wrap<A>(value: A) -> Wrapper<A> {
    Wrapper::of(value)
}

impl<A> Wrapper<A> {
    /// Wraps a value.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Alias for [`Wrapper::of`].
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Applies a function to the wrapped value, returning a new wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::wrap;
    ///
    /// assert_eq!(wrap(3).map(|n| n + 2), wrap(5));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Wrapper<B>
    where
        F: FnOnce(A) -> B,
    {
        Wrapper(function(self.0))
    }

    /// Applies a function returning a wrapper and flattens the result.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Wrapper<B>
    where
        F: FnOnce(A) -> Wrapper<B>,
    {
        function(self.0)
    }

    /// Applies a function to the wrapped value and returns the raw result.
    ///
    /// With the identity function this extracts the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::wrap;
    ///
    /// assert_eq!(wrap("alonzo").fold(str::len), 6);
    /// assert_eq!(wrap(7).fold(|n| n), 7);
    /// ```
    #[inline]
    pub fn fold<B, F>(self, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        function(self.0)
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Wrapper<Wrapper<A>> {
    /// Removes one level of wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::wrap;
    ///
    /// assert_eq!(wrap(wrap("nested")).flatten(), wrap("nested"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Wrapper<A> {
        self.0
    }
}

impl<A: fmt::Display> fmt::Display for Wrapper<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Wrapper ({})", self.0)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Wrapper<A> {
    type Inner = A;
    type WithType<B> = Wrapper<B>;
}

impl<A> Functor for Wrapper<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Wrapper<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Wrapper<A> {
    #[inline]
    fn pure<B>(value: B) -> Wrapper<B> {
        Wrapper(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Wrapper<B>, function: F) -> Wrapper<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Wrapper(function(self.0, other.0))
    }
}

impl<A> Monad for Wrapper<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Wrapper<B>
    where
        F: FnOnce(A) -> Wrapper<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Empty
// =============================================================================

/// The "no value" sentinel.
///
/// Mapping over `Empty` ignores the function and returns `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Empty;

/// Returns the [`Empty`] sentinel.
#[inline]
pub const fn empty() -> Empty {
    Empty
}

impl Empty {
    /// Ignores `function` and returns `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::{Empty, empty};
    ///
    /// assert_eq!(empty().map(|_: ()| panic!("never called")), Empty);
    /// ```
    #[inline]
    #[must_use]
    pub fn map<F>(self, _function: F) -> Self {
        self
    }
}

impl fmt::Display for Empty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

// =============================================================================
// Container
// =============================================================================

/// Either a [`Wrapper`] or the [`Empty`] sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Container<A> {
    /// A wrapped value.
    Full(Wrapper<A>),
    /// No value.
    Empty,
}

impl<A> Container<A> {
    /// Maps over the wrapped value; `Empty` stays `Empty` without calling `function`.
    pub fn map<B, F>(self, function: F) -> Container<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Full(wrapper) => Container::Full(wrapper.map(function)),
            Self::Empty => Container::Empty,
        }
    }

    /// Returns `true` for the `Empty` variant.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the wrapped value, or `default` when empty.
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Full(wrapper) => wrapper.into_inner(),
            Self::Empty => default,
        }
    }
}

impl<A> From<Wrapper<A>> for Container<A> {
    fn from(wrapper: Wrapper<A>) -> Self {
        Self::Full(wrapper)
    }
}

impl<A> From<Empty> for Container<A> {
    fn from(_: Empty) -> Self {
        Self::Empty
    }
}

impl<A: fmt::Display> fmt::Display for Container<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(wrapper) => wrapper.fmt(formatter),
            Self::Empty => Empty.fmt(formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(value: i32) -> Container<i32> {
        if value % 2 == 0 {
            wrap(value / 2).into()
        } else {
            empty().into()
        }
    }

    #[rstest]
    fn map_and_fmap_agree() {
        let by_map = wrap("Get Functional").map(str::to_uppercase);
        let by_fmap = wrap("Get Functional").fmap(str::to_uppercase);
        assert_eq!(by_map, by_fmap);
        assert_eq!(by_map.into_inner(), "GET FUNCTIONAL");
    }

    #[rstest]
    fn map_leaves_original_untouched() {
        let original = wrap(vec![1, 2, 3]);
        let mapped = original.clone().map(|mut values| {
            values.push(4);
            values
        });
        assert_eq!(original, wrap(vec![1, 2, 3]));
        assert_eq!(mapped, wrap(vec![1, 2, 3, 4]));
    }

    #[rstest]
    fn fold_with_identity_extracts() {
        assert_eq!(wrap("value").fold(|v| v), "value");
    }

    #[rstest]
    #[case(4, Container::Full(wrap(2)))]
    #[case(3, Container::Empty)]
    fn half_returns_wrapper_or_empty(#[case] input: i32, #[case] expected: Container<i32>) {
        assert_eq!(half(input), expected);
    }

    #[rstest]
    fn half_chains_through_container_map() {
        assert_eq!(half(4).map(|n| n + 1), Container::Full(wrap(3)));
        assert_eq!(half(3).map(|n| n + 1), Container::Empty);
        assert!(half(3).is_empty());
        assert_eq!(half(3).get_or_else(0), 0);
    }

    #[rstest]
    fn display_renders_contents() {
        assert_eq!(wrap(42).to_string(), "Wrapper (42)");
        assert_eq!(Container::<i32>::Empty.to_string(), "Empty");
        assert_eq!(half(10).to_string(), "Wrapper (5)");
    }

    #[rstest]
    fn flatten_and_chain_remove_nesting() {
        assert_eq!(wrap(wrap(1)).flatten(), wrap(1));
        assert_eq!(wrap(2).chain(|n| wrap(n * 10)), wrap(20));
    }

    #[rstest]
    fn map2_combines_wrapped_values() {
        assert_eq!(wrap(2).map2(wrap(3), |a, b| a * b), wrap(6));
    }
}
