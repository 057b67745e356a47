//! Paths into a record graph.
//!
//! A [`Path`] is a sequence of [`Seg`]ments. A key segment selects a field of
//! a record, an index segment selects an element of a list. Paths render as
//! `$.address.zip` or `$.grades[1]`.

use std::fmt;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Seg {
    /// A record field name.
    Key(String),
    /// A list position.
    Index(usize),
}

impl Seg {
    /// Creates a key segment.
    #[inline]
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Creates an index segment.
    #[inline]
    pub const fn index(position: usize) -> Self {
        Self::Index(position)
    }

    /// Returns the field name of a key segment.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(name) => write!(formatter, ".{name}"),
            Self::Index(position) => write!(formatter, "[{position}]"),
        }
    }
}

impl From<&str> for Seg {
    fn from(name: &str) -> Self {
        Self::Key(name.to_owned())
    }
}

impl From<String> for Seg {
    fn from(name: String) -> Self {
        Self::Key(name)
    }
}

impl From<usize> for Seg {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

/// A location in a record graph.
///
/// # Examples
///
/// ```rust
/// use functional_core::record::Path;
///
/// let path = Path::root().key("address").key("zip");
/// assert_eq!(path.to_string(), "$.address.zip");
///
/// let same: Path = ["address", "zip"].into_iter().collect();
/// assert_eq!(path, same);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Seg>);

impl Path {
    /// The empty path, addressing the root record itself.
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from segments.
    #[inline]
    pub const fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Appends a key segment.
    #[inline]
    #[must_use]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.0.push(Seg::Key(name.into()));
        self
    }

    /// Appends an index segment.
    #[inline]
    #[must_use]
    pub fn index(mut self, position: usize) -> Self {
        self.0.push(Seg::Index(position));
        self
    }

    /// Appends a segment in place.
    #[inline]
    pub fn push(&mut self, segment: Seg) {
        self.0.push(segment);
    }

    /// Returns the segments.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Returns `true` for the root path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first `length` segments as a new path.
    #[must_use]
    pub fn prefix(&self, length: usize) -> Self {
        Self(self.0[..length.min(self.0.len())].to_vec())
    }

    /// Concatenates two paths.
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        Self(self.0.iter().chain(other.0.iter()).cloned().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("$")?;
        self.0
            .iter()
            .try_for_each(|segment| write!(formatter, "{segment}"))
    }
}

impl<S: Into<Seg>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<Seg>> for Path {
    fn from(segments: Vec<Seg>) -> Self {
        Self(segments)
    }
}
