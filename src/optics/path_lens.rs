//! Lenses over dynamic record graphs, addressed by path.
//!
//! [`lens_path`] builds a [`PathLens`] from a list of keys (and list
//! indices). Unlike a typed [`Lens`](super::Lens), the path is only checked
//! when the lens is used, so every operation returns a `Result`.
//!
//! Writing through a path lens never touches the source graph. Each record
//! or list on the path is copied, the copy receives the new child, and every
//! sub-graph off the path is shared with the source. The source may be
//! frozen; the records on the new path are fresh and unfrozen.
//!
//! A path must name existing fields. A missing key, an out-of-range index,
//! or a step through a value of the wrong kind is reported as a
//! [`RecordError`] naming the failing location.

use crate::record::{Path, Record, RecordError, Seg, Value};

/// A lens addressing a location in a record graph.
///
/// # Examples
///
/// ```rust
/// use functional_core::optics::lens_path;
/// use functional_core::record::{Record, Value, deep_freeze};
///
/// let zip = Record::from_fields([("code", "08544"), ("location", "3345")]);
/// let address = Record::from_fields([("street", Value::from("Alexander")), ("zip", zip.into())]);
/// let person = deep_freeze(&Record::from_fields([("address", address)]));
///
/// let zip_code = lens_path(["address", "zip", "code"]);
/// assert_eq!(zip_code.view(&person), Ok(Value::from("08544")));
///
/// let moved = zip_code.set(&person, "90210").unwrap();
/// assert_eq!(zip_code.view(&moved), Ok(Value::from("90210")));
/// assert_eq!(zip_code.view(&person), Ok(Value::from("08544")));
///
/// assert!(lens_path(["address", "country"]).view(&person).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathLens {
    path: Path,
}

/// Builds a [`PathLens`] from path segments.
///
/// Segments may be field names (`&str`, `String`) or list indices (`usize`),
/// or a prepared [`Seg`] list.
pub fn lens_path<S, I>(segments: I) -> PathLens
where
    S: Into<Seg>,
    I: IntoIterator<Item = S>,
{
    PathLens::new(segments.into_iter().collect())
}

impl PathLens {
    /// Creates a lens for `path`.
    #[inline]
    pub const fn new(path: Path) -> Self {
        Self { path }
    }

    /// The addressed path.
    #[inline]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value at the path. The empty path reads the source itself.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PathNotFound`], [`RecordError::IndexOutOfBounds`]
    /// or [`RecordError::TypeMismatch`] when the path does not resolve.
    pub fn view(&self, source: &Record) -> Result<Value, RecordError> {
        self.path
            .segments()
            .iter()
            .enumerate()
            .try_fold(Value::Record(source.clone()), |current, (depth, segment)| {
                self.step(&current, depth, segment)
            })
            .inspect_err(|error| tracing::debug!(%error, "path lens view failed"))
    }

    /// Returns a new graph with the value at the path replaced.
    ///
    /// The source is left untouched. Records and lists on the path are
    /// copied; everything else is shared.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`view`](PathLens::view) when the path does
    /// not resolve. Setting the empty path requires a record value and
    /// reports [`RecordError::TypeMismatch`] otherwise.
    pub fn set(&self, source: &Record, value: impl Into<Value>) -> Result<Record, RecordError> {
        let root = Value::Record(source.clone());
        self.replace_at(&root, 0, value.into())
            .and_then(|updated| match updated {
                Value::Record(record) => Ok(record),
                other => Err(RecordError::type_mismatch(Path::root(), "record", other.kind())),
            })
            .inspect_err(|error| tracing::debug!(%error, "path lens set failed"))
    }

    /// Returns a new graph with `function` applied to the value at the path.
    ///
    /// # Errors
    ///
    /// See [`set`](PathLens::set).
    pub fn over<F>(&self, source: &Record, function: F) -> Result<Record, RecordError>
    where
        F: FnOnce(Value) -> Value,
    {
        let current = self.view(source)?;
        self.set(source, function(current))
    }

    /// Focuses further: the result addresses `inner`'s path below this one.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self::new(self.path.join(&inner.path))
    }

    fn step(&self, current: &Value, depth: usize, segment: &Seg) -> Result<Value, RecordError> {
        match (current, segment) {
            (Value::Record(record), Seg::Key(key)) => record
                .get(key)
                .ok_or_else(|| RecordError::path_not_found(self.path.prefix(depth + 1))),
            (Value::List(items), Seg::Index(index)) => {
                items
                    .get(*index)
                    .cloned()
                    .ok_or_else(|| RecordError::IndexOutOfBounds {
                        path: self.path.prefix(depth),
                        index: *index,
                        len: items.len(),
                    })
            }
            (other, Seg::Key(_)) => Err(RecordError::type_mismatch(
                self.path.prefix(depth),
                "record",
                other.kind(),
            )),
            (other, Seg::Index(_)) => Err(RecordError::type_mismatch(
                self.path.prefix(depth),
                "list",
                other.kind(),
            )),
        }
    }

    fn replace_at(&self, current: &Value, depth: usize, value: Value) -> Result<Value, RecordError> {
        let Some(segment) = self.path.segments().get(depth) else {
            return Ok(value);
        };
        let child = self.step(current, depth, segment)?;
        let replaced = self.replace_at(&child, depth + 1, value)?;

        match (current, segment) {
            (Value::Record(record), Seg::Key(key)) => {
                let copy = record.shallow_copy();
                copy.set(key.clone(), replaced)?;
                Ok(Value::Record(copy))
            }
            (Value::List(items), Seg::Index(index)) => {
                let mut copy = items.clone();
                copy[*index] = replaced;
                Ok(Value::List(copy))
            }
            (other, _) => Err(RecordError::type_mismatch(
                self.path.prefix(depth),
                "record or list",
                other.kind(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::deep_freeze;
    use rstest::rstest;

    fn student() -> Record {
        let zip = Record::from_fields([("code", "08544"), ("location", "3345")]);
        let address = Record::from_fields([("street", Value::from("Nassau")), ("zip", zip.into())]);
        Record::from_fields([
            ("name", Value::from("Alonzo")),
            ("grades", Value::from(vec![80, 90, 100])),
            ("address", address.into()),
        ])
    }

    #[rstest]
    fn view_walks_nested_keys() {
        let lens = lens_path(["address", "zip", "location"]);
        assert_eq!(lens.view(&student()), Ok(Value::from("3345")));
    }

    #[rstest]
    fn view_indexes_into_lists() {
        let lens = lens_path(vec![Seg::key("grades"), Seg::index(1)]);
        assert_eq!(lens.view(&student()), Ok(Value::from(90)));
    }

    #[rstest]
    fn empty_path_views_the_root() {
        let source = student();
        assert_eq!(lens_path(Vec::<Seg>::new()).view(&source), Ok(Value::Record(source)));
    }

    #[rstest]
    #[case(vec!["address", "country"], RecordError::path_not_found(Path::root().key("address").key("country")))]
    #[case(vec!["name", "first"], RecordError::type_mismatch(Path::root().key("name"), "record", "text"))]
    fn unknown_paths_are_reported(#[case] segments: Vec<&str>, #[case] expected: RecordError) {
        assert_eq!(lens_path(segments).view(&student()), Err(expected));
    }

    #[rstest]
    fn index_past_end_is_reported() {
        let lens = lens_path(vec![Seg::key("grades"), Seg::index(7)]);
        assert_eq!(
            lens.view(&student()),
            Err(RecordError::IndexOutOfBounds {
                path: Path::root().key("grades"),
                index: 7,
                len: 3,
            })
        );
    }

    #[rstest]
    fn set_copies_the_path_and_shares_the_rest() {
        let source = deep_freeze(&student());
        let lens = lens_path(["address", "zip", "code"]);

        let updated = lens.set(&source, "90210").unwrap();

        assert!(!Record::ptr_eq(&updated, &source));
        assert_eq!(source, student());
        assert!(!updated.is_frozen());

        let old_grades = source.get("grades");
        assert_eq!(updated.get("grades"), old_grades);

        let street = lens_path(["address", "street"]);
        assert_eq!(street.view(&updated), Ok(Value::from("Nassau")));
    }

    #[rstest]
    fn set_shares_untouched_subrecords_by_identity() {
        let source = student();
        let updated = lens_path(["name"]).set(&source, "Haskell").unwrap();
        let address_of = |record: &Record| record.get("address").and_then(|v| v.as_record().cloned());
        let (before, after) = (address_of(&source).unwrap(), address_of(&updated).unwrap());
        assert!(Record::ptr_eq(&before, &after));
    }

    #[rstest]
    fn set_inside_list_copies_the_list() {
        let source = student();
        let lens = lens_path(vec![Seg::key("grades"), Seg::index(0)]);
        let updated = lens.set(&source, 85).unwrap();
        assert_eq!(updated.get("grades"), Some(Value::from(vec![85, 90, 100])));
        assert_eq!(source.get("grades"), Some(Value::from(vec![80, 90, 100])));
    }

    #[rstest]
    fn set_on_missing_key_fails() {
        let result = lens_path(["address", "country"]).set(&student(), "US");
        assert!(matches!(result, Err(RecordError::PathNotFound { .. })));
    }

    #[rstest]
    fn set_on_empty_path_requires_record() {
        let root = lens_path(Vec::<Seg>::new());
        let replacement = Record::from_fields([("only", 1)]);
        assert_eq!(root.set(&student(), replacement.clone()), Ok(replacement));
        assert!(root.set(&student(), 3).is_err());
    }

    #[rstest]
    fn over_transforms_in_place_of_set() {
        let lens = lens_path(["name"]);
        let shouted = lens
            .over(&student(), |value| Value::from(value.as_text().unwrap_or_default().to_uppercase()))
            .unwrap();
        assert_eq!(lens.view(&shouted), Ok(Value::from("ALONZO")));
    }

    #[rstest]
    fn compose_concatenates_paths() {
        let address = lens_path(["address"]);
        let zip_code = lens_path(["zip", "code"]);
        assert_eq!(address.compose(&zip_code), lens_path(["address", "zip", "code"]));
    }
}
