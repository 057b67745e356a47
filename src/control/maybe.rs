//! Maybe - an optional value with structural absence.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. Every operation on `Nothing`
//! short-circuits: `map`, `chain` and `filter` return `Nothing` without
//! calling the supplied function. Absence is part of the value, so no
//! operation here panics or returns an error except the explicit
//! value-only accessor [`Maybe::value`].
//!
//! # Examples
//!
//! ```rust
//! use functional_core::control::Maybe;
//!
//! fn find_city(id: u32) -> Option<&'static str> {
//!     (id == 1).then_some("Princeton")
//! }
//!
//! let city = Maybe::from_nullable(find_city(1)).map(str::to_uppercase);
//! assert_eq!(city.get_or_else("unknown".to_string()), "PRINCETON");
//!
//! let missing = Maybe::from_nullable(find_city(2)).map(str::to_uppercase);
//! assert_eq!(missing.get_or_else("unknown".to_string()), "unknown");
//! ```

use std::fmt;

use super::Either;
use super::error::AccessError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// # Examples
///
/// ```rust
/// use functional_core::control::Maybe;
///
/// let just = Maybe::just(5).map(|n| n * 2);
/// assert_eq!(just, Maybe::Just(10));
///
/// let nothing: Maybe<i32> = Maybe::nothing();
/// assert_eq!(nothing.map(|n| n * 2), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps any value in `Just`, including an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(None::<i32>), Maybe::Just(None));
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Just(value)
    }

    /// Wraps a value in `Just`.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Lifts a possibly-absent value: `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::Just(3));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Nothing`] when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::{AccessError, Maybe};
    ///
    /// assert_eq!(Maybe::just(1).value(), Ok(&1));
    /// assert_eq!(Maybe::<i32>::nothing().value(), Err(AccessError::Nothing));
    /// ```
    pub const fn value(&self) -> Result<&A, AccessError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(AccessError::Nothing),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a `Just` value; `Nothing` passes through untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-returning function and flattens one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Maybe;
    ///
    /// let positive = |n: i32| if n > 0 { Maybe::just(n) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::just(4).chain(positive), Maybe::just(4));
    /// assert_eq!(Maybe::just(-4).chain(positive), Maybe::nothing());
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a `Just` value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Just` value, or `default` for `Nothing`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the `Just` value, or computes a fallback for `Nothing`.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn to_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts into an [`Either`], using `error` as the `Left` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::just(9).to_either("missing"), Either::right(9));
    /// assert_eq!(Maybe::<i32>::nothing().to_either("missing"), Either::left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, error: L) -> Either<L, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(error),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Maybe.Just({value})"),
            Self::Nothing => formatter.write_str("Maybe.Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        Self::from_nullable(option)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.to_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}
