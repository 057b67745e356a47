//! Shared, freezable records.
//!
//! A [`Record`] is a reference-counted handle to a map of named fields.
//! Cloning the handle does not copy the fields: every clone observes the same
//! record, the way object references behave in a dynamic language. Records
//! are mutable through [`Record::set`] until frozen; after that every write
//! fails with [`RecordError::Frozen`] instead of being silently ignored.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::error::RecordError;
use super::value::Value;

#[derive(Default)]
struct RecordCell {
    fields: RefCell<BTreeMap<String, Value>>,
    frozen: Cell<bool>,
}

/// A handle to a shared, freezable map of fields.
///
/// Equality is structural: two records are equal when their fields are
/// equal, regardless of identity. Use [`Record::ptr_eq`] to compare identity.
/// Comparing or printing two distinct cyclic graphs does not terminate.
///
/// # Examples
///
/// ```rust
/// use functional_core::record::{Record, RecordError, Value};
///
/// let person = Record::from_fields([("first", "Alonzo"), ("last", "Church")]);
/// let alias = person.clone();
///
/// person.set("first", "Haskell").unwrap();
/// assert_eq!(alias.get("first"), Some(Value::from("Haskell")));
///
/// person.freeze();
/// assert_eq!(alias.set("last", "Curry"), Err(RecordError::frozen("last")));
/// ```
#[derive(Clone, Default)]
pub struct Record(Rc<RecordCell>);

impl Record {
    /// Creates an empty, unfrozen record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unfrozen record from key/value pairs.
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        fields.into_iter().collect()
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Returns a copy of the field value. Nested records are returned as
    /// shared handles.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.fields.borrow().get(key).cloned()
    }

    /// Returns `true` if the field exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.fields.borrow().contains_key(key)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.0.fields.borrow().keys().cloned().collect()
    }

    /// A snapshot of all fields in key order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .fields
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.fields.borrow().len()
    }

    /// Returns `true` when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.fields.borrow().is_empty()
    }

    // =========================================================================
    // Writing
    // =========================================================================

    /// Writes a field, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Frozen`] if the record is frozen; the record is
    /// left unchanged.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>, RecordError> {
        let key = key.into();
        self.ensure_writable(&key)?;
        Ok(self.0.fields.borrow_mut().insert(key, value.into()))
    }

    /// Removes a field, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Frozen`] if the record is frozen.
    pub fn remove(&self, key: &str) -> Result<Option<Value>, RecordError> {
        self.ensure_writable(key)?;
        Ok(self.0.fields.borrow_mut().remove(key))
    }

    fn ensure_writable(&self, key: &str) -> Result<(), RecordError> {
        if self.is_frozen() {
            tracing::debug!(key, "rejected write to frozen record");
            return Err(RecordError::frozen(key));
        }
        Ok(())
    }

    // =========================================================================
    // Freezing and identity
    // =========================================================================

    /// Freezes this record only. Nested records stay writable; use
    /// [`deep_freeze`](super::deep_freeze) to freeze a whole graph.
    pub fn freeze(&self) {
        self.0.frozen.set(true);
    }

    /// Returns `true` once the record has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.0.frozen.get()
    }

    /// Creates a new, unfrozen record holding the same field values.
    ///
    /// Nested records are shared with the original, not copied.
    #[must_use]
    pub fn shallow_copy(&self) -> Self {
        Self(Rc::new(RecordCell {
            fields: RefCell::new(self.0.fields.borrow().clone()),
            frozen: Cell::new(false),
        }))
    }

    /// Returns `true` if both handles refer to the same record.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// An address identifying this record while it is alive.
    pub(crate) fn identity(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.0.fields.borrow() == *other.0.fields.borrow()
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        for (key, value) in self.0.fields.borrow().iter() {
            map.entry(key, value);
        }
        map.finish()?;
        if self.is_frozen() {
            formatter.write_str(" (frozen)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (position, (key, value)) in self.0.fields.borrow().iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self(Rc::new(RecordCell {
            fields: RefCell::new(fields),
            frozen: Cell::new(false),
        }))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let fields = self.0.fields.borrow();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in fields.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
pub(super) struct RecordVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of field names to values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Record, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut fields = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            fields.insert(key, value);
        }
        Ok(fields.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}
