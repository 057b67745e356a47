//! Function composition utilities.
//!
//! Macros:
//!
//! - [`compose!`]: right-to-left composition
//! - [`pipe!`]: left-to-right application to a value
//! - [`curry2!`], [`curry3!`], [`curry4!`]: currying
//! - [`partial!`]: partial application with `__` placeholders
//!
//! Combinators: [`identity`], [`constant`], [`flip`], [`negate`], [`fork`],
//! [`tap`], [`compose2`], [`memoize`].
//!
//! # Examples
//!
//! ```rust
//! use functional_core::compose::{fork, negate};
//! use functional_core::{compose, pipe};
//!
//! let trim = |text: String| text.trim().to_string();
//! let strip_dashes = |text: String| text.replace('-', "");
//! let clean_input = compose!(strip_dashes, trim);
//! assert_eq!(clean_input(" 444-44-4444 ".to_string()), "444444444");
//!
//! let is_blank = |text: &String| text.is_empty();
//! assert!(negate(is_blank)(&"x".to_string()));
//!
//! let spread = fork(|max: i32, min: i32| max - min, |v: &Vec<i32>| v[2], |v: &Vec<i32>| v[0]);
//! assert_eq!(pipe!(vec![1, 5, 9], spread), 8);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(f, identity) == f == compose!(identity, f)`
//! - **Pipe/compose duality**: `pipe!(x, f, g) == compose!(g, f)(x)`

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod utils;

pub use utils::{__, Placeholder, compose2, constant, flip, fork, identity, memoize, negate, tap};

// Macros are exported at the crate root via #[macro_export].
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
