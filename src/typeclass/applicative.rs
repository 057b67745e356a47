//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a plain value into the context (`Maybe::Just`,
//!   `Either::Right`, `Wrapper`)
//! - `map2`: combine two independent contexts with a binary function
//!
//! For the short-circuiting containers the first absent or failed side wins:
//! `map2` on a `Nothing` or a `Left` never calls the function.
//!
//! # Laws
//!
//! ```text
//! pure(x).map2(pure(y), f) == pure(f(x, y))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
///
/// # Examples
///
/// ```rust
/// use functional_core::typeclass::Applicative;
/// use functional_core::control::Maybe;
///
/// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
/// assert_eq!(sum, Maybe::just(3));
///
/// let missing = Maybe::just(1).map2(Maybe::<i32>::nothing(), |a, b| a + b);
/// assert_eq!(missing, Maybe::nothing());
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - Combines the two inner values
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two applicative values.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}
