//! Either - a right-biased sum of a failure and a success.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. By convention `Left` carries an
//! error payload and `Right` the successful value. All sequencing operations
//! are biased to the right: `map`, `chain` and `filter` act on `Right` and
//! pass a `Left` through with its original payload, so the first `Left` in a
//! pipeline is the one that comes out the other end.
//!
//! # Examples
//!
//! ```rust
//! use functional_core::control::Either;
//!
//! fn check_length_ssn(ssn: &str) -> Either<String, &str> {
//!     Either::of(ssn).filter(|s| s.len() == 9, format!("invalid SSN length: {ssn}"))
//! }
//!
//! assert_eq!(check_length_ssn("444444444"), Either::right("444444444"));
//! assert!(check_length_ssn("44444444").is_left());
//!
//! // A Left short-circuits every later step.
//! let result = check_length_ssn("123")
//!     .map(str::len)
//!     .chain(|length| Either::right(length * 2));
//! assert_eq!(result, Either::left("invalid SSN length: 123".to_string()));
//! ```

use std::fmt;

use super::error::AccessError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a `Left` failure or a `Right` success.
///
/// # Type Parameters
///
/// * `L` - The type of the left (failure) payload
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use functional_core::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::left("error".to_string());
/// assert_eq!(failure.clone().map(|x| x * 2), failure);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure side.
    Left(L),
    /// The success side.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value on the right. Same as [`Either::right`].
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a successful value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a failure payload.
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Lifts a possibly-absent value, using `error` as the payload when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Either;
    ///
    /// let students = ["alonzo", "haskell"];
    /// let find = |index: usize| {
    ///     Either::from_nullable_or(students.get(index).copied(), format!("no student #{index}"))
    /// };
    ///
    /// assert_eq!(find(1), Either::right("haskell"));
    /// assert_eq!(find(5), Either::left("no student #5".to_string()));
    /// ```
    #[inline]
    pub fn from_nullable_or(value: Option<R>, error: L) -> Self {
        value.map_or(Self::Left(error), Self::Right)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows the left payload, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the right value; a `Left` never exposes one.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Left`] carrying the debug rendering of the left
    /// payload when called on a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::{AccessError, Either};
    ///
    /// assert_eq!(Either::<&str, i32>::right(1).value(), Ok(&1));
    /// assert_eq!(
    ///     Either::<&str, i32>::left("boom").value(),
    ///     Err(AccessError::Left { payload: "\"boom\"".to_string() })
    /// );
    /// ```
    pub fn value(&self) -> Result<&R, AccessError>
    where
        L: fmt::Debug,
    {
        match self {
            Self::Left(error) => Err(AccessError::Left {
                payload: format!("{error:?}"),
            }),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the right value; a `Left` passes through unchanged.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps the left payload; a `Right` passes through unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies an `Either`-returning function to the right value and flattens.
    ///
    /// The function is never called on a `Left`.
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Turns a `Right` that fails `predicate` into `Left(error)`.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Test applied to the right value
    /// * `error` - Left payload used when the test fails
    pub fn filter<P>(self, predicate: P, error: L) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        self.filter_or_else(predicate, |_| error)
    }

    /// Like [`filter`](Either::filter), building the left payload from the rejected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Either;
    ///
    /// let adult = Either::<String, u32>::right(15)
    ///     .filter_or_else(|age| *age >= 18, |age| format!("{age} is under age"));
    /// assert_eq!(adult, Either::left("15 is under age".to_string()));
    /// ```
    pub fn filter_or_else<P, E>(self, predicate: P, on_reject: E) -> Self
    where
        P: FnOnce(&R) -> bool,
        E: FnOnce(R) -> L,
    {
        match self {
            Self::Right(value) if predicate(&value) => Self::Right(value),
            Self::Right(value) => Self::Left(on_reject(value)),
            Self::Left(error) => Self::Left(error),
        }
    }

    /// Recovers from a `Left` by handing its payload to `function`.
    ///
    /// A `Right` is returned unchanged without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Either;
    ///
    /// let recovered = Either::<&str, i32>::left("missing")
    ///     .or_else(|error| Either::<(), i32>::right(error.len() as i32));
    /// assert_eq!(recovered, Either::right(7));
    /// ```
    pub fn or_else<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or computes a fallback from the left payload.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(error) => fallback(error),
            Self::Right(value) => value,
        }
    }

    /// Converts into a `Result`, `Left` becoming `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<R> Either<(), R> {
    /// Lifts a possibly-absent value: `None` becomes `Left(())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::control::Either;
    ///
    /// assert_eq!(Either::from_nullable(Some(1)), Either::right(1));
    /// assert_eq!(Either::<(), i32>::from_nullable(None), Either::left(()));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>) -> Self {
        Self::from_nullable_or(value, ())
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Either.Left({error})"),
            Self::Right(value) => write!(formatter, "Either.Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)` and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}
