//! Optics for reading and updating immutable data.
//!
//! Two flavours are provided:
//!
//! - [`Lens`]: a typed getter/setter pair over Rust structs. Build one with
//!   [`lens`], the [`lens!`](crate::lens) macro or `#[derive(Lenses)]`.
//! - [`PathLens`]: a lens addressing a location in a dynamic
//!   [`Record`](crate::record::Record) graph by keys and list indices.
//!   Build one with [`lens_path`].
//!
//! Both leave their source untouched and return a new value on write.
//!
//! # Example
//!
//! ```
//! use functional_core::lens;
//! use functional_core::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alonzo".to_string(),
//!     address: Address { street: "Nassau St".to_string(), city: "Princeton".to_string() },
//! };
//!
//! assert_eq!(*person_street.get(&person), "Nassau St");
//!
//! let updated = person_street.set(person, "Mercer St".to_string());
//! assert_eq!(updated.address.street, "Mercer St");
//! assert_eq!(updated.address.city, "Princeton");
//! ```

mod lens;
mod path_lens;

pub use lens::{ComposedLens, FunctionLens, Lens, lens, over, set, view};
pub use path_lens::{PathLens, lens_path};

#[cfg(feature = "derive")]
pub use functional_core_derive::Lenses;
