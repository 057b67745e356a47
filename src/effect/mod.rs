//! Deferred effects.
//!
//! [`IO`] wraps a side-effecting computation as a value. Effects run only
//! when [`IO::run`] is called, and they run again on every call.
//!
//! ```rust
//! use functional_core::effect::IO;
//!
//! let greeting = IO::of("world").map(|name| format!("hello, {name}"));
//! assert_eq!(greeting.run(), "hello, world");
//! ```

mod io;

pub use io::IO;
