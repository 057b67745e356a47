//! # functional-core
//!
//! Functional building blocks for Rust: algebraic containers, an IO effect,
//! function combinators, lenses and deep-frozen record graphs.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative) and [`Monad`](typeclass::Monad)
//!   over a GAT-encoded [`TypeConstructor`](typeclass::TypeConstructor)
//! - **Containers**: [`Wrapper`](control::Wrapper), [`Empty`](control::Empty),
//!   [`Maybe`](control::Maybe) and [`Either`](control::Either)
//! - **Effects**: [`IO`](effect::IO), a deferred, re-runnable computation
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`,
//!   `partial!` and combinators such as [`tap`](compose::tap) and
//!   [`fork`](compose::fork)
//! - **Records**: shared, freezable [`Record`](record::Record) graphs and
//!   [`deep_freeze`](record::deep_freeze)
//! - **Optics**: typed [`Lens`](optics::Lens)es and path lenses over records
//!
//! ## Feature Flags
//!
//! - `typeclass`: Functor, Applicative, Monad
//! - `compose`: composition macros and combinators
//! - `control`: Wrapper, Empty, Maybe, Either
//! - `effect`: IO
//! - `record`: dynamic records and deep freezing
//! - `optics`: lenses and path lenses
//! - `derive`: `#[derive(Lenses)]`
//! - `serde`: serialization for containers and records
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use functional_core::prelude::*;
//!
//! let safe_half = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() };
//!
//! assert_eq!(Maybe::just(16).chain(safe_half).chain(safe_half), Maybe::just(4));
//! assert_eq!(Maybe::just(6).chain(safe_half).chain(safe_half), Maybe::nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the public items of every enabled module.
///
/// ```rust
/// use functional_core::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "optics")]
pub mod optics;
