//! Error types for record access and mutation.

use thiserror::Error;

use super::path::Path;

/// Errors raised by [`Record`](super::Record) writes and path traversal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A write was attempted on a frozen record.
    #[error("cannot assign to field '{key}' of a frozen record")]
    Frozen {
        /// The field that was being written.
        key: String,
    },

    /// A key segment named a field that does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path up to and including the missing segment.
        path: Path,
    },

    /// An index segment was past the end of a list.
    #[error("index {index} out of bounds (len: {len}) at path {path}")]
    IndexOutOfBounds {
        /// The path to the list.
        path: Path,
        /// The requested index.
        index: usize,
        /// The list length.
        len: usize,
    },

    /// A segment tried to step into a value of the wrong kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path to the offending value.
        path: Path,
        /// The kind that the segment needed.
        expected: &'static str,
        /// The kind that was present.
        found: &'static str,
    },
}

impl RecordError {
    /// Creates a frozen-record error.
    #[inline]
    pub fn frozen(key: impl Into<String>) -> Self {
        Self::Frozen { key: key.into() }
    }

    /// Creates a path-not-found error.
    #[inline]
    pub const fn path_not_found(path: Path) -> Self {
        Self::PathNotFound { path }
    }

    /// Creates a type-mismatch error.
    #[inline]
    pub const fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            path,
            expected,
            found,
        }
    }
}
