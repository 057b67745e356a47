//! Algebraic containers.
//!
//! - [`Wrapper`]: the identity functor, always holding one value
//! - [`Empty`]: the "no value" sentinel, and [`Container`] joining the two
//! - [`Maybe`]: `Just` a value or `Nothing`
//! - [`Either`]: a `Left` failure or a `Right` success
//!
//! Every container is immutable; each operation returns a new container.
//! `Nothing` and `Left` short-circuit: the functions handed to `map`,
//! `chain` and `filter` are never called on them.
//!
//! # Examples
//!
//! ## Short-circuiting a lookup pipeline
//!
//! ```rust
//! use functional_core::control::{Either, Maybe};
//!
//! fn find(id: &str) -> Option<&'static str> {
//!     (id == "444-44-4444").then_some("Alonzo Church")
//! }
//!
//! let name = Maybe::from_nullable(find("444-44-4444")).map(str::len);
//! assert_eq!(name, Maybe::just(13));
//!
//! let missing = Either::from_nullable_or(find("000"), "not found").map(str::len);
//! assert_eq!(missing, Either::left("not found"));
//! ```

mod either;
mod error;
mod maybe;
mod wrapper;

pub use either::Either;
pub use error::AccessError;
pub use maybe::Maybe;
pub use wrapper::{Container, Empty, Wrapper, empty, wrap};
