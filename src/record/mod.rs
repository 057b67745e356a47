//! Dynamic record graphs with observable immutability.
//!
//! Typed Rust values are immutable by construction. This module covers the
//! other case: loosely structured object graphs built at run time, whose
//! shape is only known from data.
//!
//! - [`Value`]: a dynamically typed field value
//! - [`Record`]: a shared handle to a map of fields, writable until frozen
//! - [`deep_freeze`]: freezes every record reachable from a root
//! - [`Path`] / [`Seg`]: locations inside a graph, used by
//!   [`lens_path`](crate::optics::lens_path)
//! - [`RecordError`]: frozen writes and failed traversals
//!
//! # Examples
//!
//! ```rust
//! use functional_core::record::{Record, RecordError, deep_freeze};
//!
//! let student = deep_freeze(&Record::from_fields([("ssn", "444-44-4444")]));
//! assert_eq!(student.set("ssn", "000-00-0000"), Err(RecordError::frozen("ssn")));
//! ```

mod error;
mod freeze;
mod object;
mod path;
mod value;

pub use error::RecordError;
pub use freeze::{deep_freeze, is_deep_frozen};
pub use object::Record;
pub use path::{Path, Seg};
pub use value::Value;
