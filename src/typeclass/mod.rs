//! Type class traits shared by every container in this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//!
//! `Wrapper`, `Maybe` and `Either` implement all four. `IO` is re-runnable
//! and therefore takes `Fn` closures; it exposes the same operations as
//! inherent methods instead.
//!
//! # Examples
//!
//! ```rust
//! use functional_core::typeclass::{Functor, Monad};
//! use functional_core::control::Maybe;
//!
//! let result = Maybe::just(10)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| if n > 5 { Maybe::just(n) } else { Maybe::nothing() });
//! assert_eq!(result, Maybe::just(11));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
