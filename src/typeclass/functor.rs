//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value(s) inside a container while
//! preserving the container's shape. `Maybe::Nothing` stays `Nothing`,
//! `Either::Left` stays `Left`, a `Wrapper` stays a `Wrapper`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_core::typeclass::Functor;
//! use functional_core::control::{Maybe, wrap};
//!
//! let wrapped = wrap(5).fmap(|n| n.to_string());
//! assert_eq!(wrapped, wrap("5".to_string()));
//!
//! // Nothing is preserved
//! let nothing: Maybe<i32> = Maybe::nothing();
//! assert_eq!(nothing.fmap(|n| n + 1), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use functional_core::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same shape holding the transformed value(s).
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_core::typeclass::Functor;
    /// use functional_core::control::wrap;
    ///
    /// assert_eq!(wrap(1).replace("one"), wrap("one"));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles_present_values(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn replace_keeps_shape() {
        assert_eq!(Some(1).replace('x'), Some('x'));
        assert_eq!(None::<i32>.replace('x'), None);
    }

    #[rstest]
    fn void_discards_value() {
        assert_eq!(Some("value").void(), Some(()));
    }
}
