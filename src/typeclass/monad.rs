//! Monad type class - sequencing computations that depend on earlier results.
//!
//! `Monad` extends [`Applicative`] with `flat_map`: the next step is computed
//! from the previous value and may itself be absent or failed. One level of
//! nesting is flattened on every step, so a chain of `flat_map` calls never
//! produces `Maybe<Maybe<_>>`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_core::typeclass::Monad;
//! use functional_core::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! let doubled = Either::<String, &str>::right("21").flat_map(|text| parse(text).map(|n| n * 2));
//! assert_eq!(doubled, Either::right(42));
//!
//! let failed = Either::<String, &str>::right("x").flat_map(parse);
//! assert_eq!(failed, Either::left("not a number: x".to_string()));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing dependent computations.
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - Produces the next monadic value from the current value
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map), the conventional Rust name.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Alias for [`flat_map`](Monad::flat_map) under its functional-JS name.
    #[inline]
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic values, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}
