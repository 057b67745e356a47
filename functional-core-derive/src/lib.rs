//! Derive macro for functional-core lenses.
//!
//! `#[derive(Lenses)]` adds a `{field}_lens()` associated function for every
//! named field of a struct. Each returns a
//! `functional_core::optics::FunctionLens` focusing on that field.
//!
//! The derive is used through the `functional_core::optics::Lenses`
//! re-export. The example below is exercised, compile-checked, by
//! `tests/derive_tests.rs` in the `functional-core` crate.
//!
//! ```rust,ignore
//! use functional_core::optics::{Lens, Lenses};
//!
//! #[derive(Clone, Lenses)]
//! struct ZipCode {
//!     code: String,
//!     location: String,
//! }
//!
//! let zip = ZipCode { code: "08544".into(), location: "3345".into() };
//! assert_eq!(ZipCode::code_lens().get(&zip), "08544");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives a lens accessor for each named field of a struct.
///
/// For a field `foo: T` on `S`, generates
/// `pub fn foo_lens() -> impl Lens<S, T> + Clone`. Generic structs are
/// supported; tuple structs, unit structs, enums and unions are rejected
/// with a compile error.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(lenses::expand(&input))
}
