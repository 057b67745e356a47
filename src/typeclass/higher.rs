//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! The [`TypeConstructor`] trait works around this with a generic associated
//! type: every container names itself applied to its current element type
//! (`Inner`) and applied to any other element type (`WithType<B>`).
//!
//! The [`Functor`](super::Functor), [`Applicative`](super::Applicative) and
//! [`Monad`](super::Monad) traits are all defined on top of it.
//!
//! # Example
//!
//! ```rust
//! use functional_core::typeclass::TypeConstructor;
//! use functional_core::control::Maybe;
//!
//! fn nothing_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_number = Maybe::just(42);
//! assert_eq!(nothing_like(&just_number), Maybe::<String>::Nothing);
//! ```

/// A trait representing a type constructor applied to one type argument.
///
/// # Associated Types
///
/// - `Inner`: the type argument the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be the type `F` itself.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Maybe<i32>`.
    type Inner;

    /// The same constructor applied to a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
