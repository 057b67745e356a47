//! Recursive freezing of record graphs.
//!
//! [`Record::freeze`] only protects one record. [`deep_freeze`] walks every
//! record reachable from a root, through nested records and through lists,
//! and freezes each one. Children are frozen before their parents, every
//! record is visited at most once, so shared sub-graphs and cycles are safe.

use std::collections::HashSet;

use super::object::Record;
use super::value::Value;

/// Freezes `root` and every record reachable from it.
///
/// Returns the same handle it was given. Calling it again on an already
/// frozen graph changes nothing.
///
/// # Examples
///
/// ```rust
/// use functional_core::record::{Record, RecordError, Value, deep_freeze};
///
/// let address = Record::from_fields([("country", "US")]);
/// let person = Record::from_fields([("name", Value::from("Alonzo")), ("address", address.into())]);
///
/// let frozen = deep_freeze(&person);
/// assert!(Record::ptr_eq(&frozen, &person));
///
/// let nested = frozen.get("address").and_then(|value| value.as_record().cloned()).unwrap();
/// assert_eq!(nested.set("country", "UK"), Err(RecordError::frozen("country")));
/// assert_eq!(nested.get("country"), Some(Value::from("US")));
/// ```
pub fn deep_freeze(root: &Record) -> Record {
    let mut visited = HashSet::new();
    freeze_record(root, &mut visited);
    tracing::debug!(records = visited.len(), "deep-froze record graph");
    root.clone()
}

/// Returns `true` if `root` and every record reachable from it are frozen.
pub fn is_deep_frozen(root: &Record) -> bool {
    let mut visited = HashSet::new();
    all_frozen(root, &mut visited)
}

fn freeze_record(record: &Record, visited: &mut HashSet<*const ()>) {
    if !visited.insert(record.identity()) {
        return;
    }
    for (_, value) in record.entries() {
        freeze_value(&value, visited);
    }
    record.freeze();
}

fn freeze_value(value: &Value, visited: &mut HashSet<*const ()>) {
    match value {
        Value::Record(record) => freeze_record(record, visited),
        Value::List(items) => items.iter().for_each(|item| freeze_value(item, visited)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {}
    }
}

fn all_frozen(record: &Record, visited: &mut HashSet<*const ()>) -> bool {
    if !visited.insert(record.identity()) {
        return true;
    }
    record.is_frozen()
        && record
            .entries()
            .iter()
            .all(|(_, value)| value_frozen(value, visited))
}

fn value_frozen(value: &Value, visited: &mut HashSet<*const ()>) -> bool {
    match value {
        Value::Record(record) => all_frozen(record, visited),
        Value::List(items) => items.iter().all(|item| value_frozen(item, visited)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => true,
    }
}
