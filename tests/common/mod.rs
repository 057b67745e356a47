//! Shared fixtures for the integration tests.
//!
//! These are the collaborators the library is exercised against: a small
//! student store, string normalisation helpers, immutable value objects and
//! a rose tree.

#![allow(dead_code)]

use std::fmt;

use functional_core::compose;
use functional_core::control::Either;
use functional_core::record::{Record, Value};

// =============================================================================
// Logging
// =============================================================================

/// Installs a test-friendly `tracing` subscriber once per test binary.
///
/// Set `RUST_LOG=functional_core=trace` to see library events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Student store
// =============================================================================

/// Builds the person record stored under both SSN spellings.
pub fn alonzo() -> Record {
    Record::from_fields([
        ("ssn", "444-44-4444"),
        ("firstname", "Alonzo"),
        ("lastname", "Church"),
    ])
}

/// Looks up a person by SSN, with or without dashes.
pub fn find(id: &str) -> Option<Record> {
    match id {
        "444-44-4444" | "444444444" => Some(alonzo()),
        _ => None,
    }
}

/// Looks up a person, reporting a missing id as a `Left`.
pub fn safe_find_object(id: &str) -> Either<String, Record> {
    Either::from_nullable_or(find(id), format!("Object not found with ID: {id}"))
}

/// Accepts an SSN of exactly nine characters.
pub fn check_length_ssn(ssn: String) -> Either<String, String> {
    Either::right(ssn).filter(|ssn| ssn.chars().count() == 9, "invalid SSN".to_string())
}

/// Reads the named text fields of a record, in order.
pub fn props(keys: &[&str], record: &Record) -> Vec<String> {
    keys.iter()
        .map(|key| {
            record
                .get(key)
                .and_then(|value| value.as_text().map(str::to_string))
                .unwrap_or_default()
        })
        .collect()
}

/// Joins fields with commas.
pub fn csv(fields: Vec<String>) -> String {
    fields.join(",")
}

// =============================================================================
// Strings
// =============================================================================

pub fn trim(text: String) -> String {
    text.trim().to_string()
}

/// Removes dashes.
pub fn normalize(text: String) -> String {
    text.replace('-', "")
}

/// Trims, then removes dashes: `" 444-44-4444 "` becomes `"444444444"`.
pub fn clean_input(text: &str) -> String {
    compose!(normalize, trim)(text.to_string())
}

/// The first `count` characters.
pub fn first_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Rewrites `"First Last"` as `"Last, First"`.
pub fn as_name(text: &str) -> String {
    match text.split_once(char::is_whitespace) {
        Some((first, last)) => format!("{}, {first}", last.trim()),
        None => text.to_string(),
    }
}

/// Splits on runs of whitespace.
pub fn explode(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// =============================================================================
// Value objects
// =============================================================================

/// A postal code with its location suffix. Immutable: no setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZipCode {
    code: String,
    location: String,
}

pub fn zip_code(code: &str, location: &str) -> ZipCode {
    ZipCode {
        code: code.to_string(),
        location: location.to_string(),
    }
}

impl ZipCode {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}-{}", self.code, self.location)
    }
}

/// A geographic point. Translation returns a new point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    lat: f64,
    long: f64,
}

pub const fn coordinate(lat: f64, long: f64) -> Coordinate {
    Coordinate { lat, long }
}

impl Coordinate {
    pub const fn latitude(&self) -> f64 {
        self.lat
    }

    pub const fn longitude(&self) -> f64 {
        self.long
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        coordinate(self.lat + dx, self.long + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.lat, self.long)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A student record with a nested address and zip code.
pub fn student_record() -> Record {
    let zip = Record::from_fields([("code", "08544"), ("location", "3345")]);
    let address = Record::from_fields([
        ("street", Value::from("Alexander St")),
        ("country", Value::from("US")),
        ("zip", zip.into()),
    ]);
    Record::from_fields([
        ("ssn", Value::from("444-44-4444")),
        ("firstname", Value::from("Alonzo")),
        ("lastname", Value::from("Church")),
        ("school", Value::from("Princeton")),
        ("address", address.into()),
    ])
}

// =============================================================================
// Tree
// =============================================================================

/// A rose tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<T> {
    pub value: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub const fn node(value: T, children: Vec<Self>) -> Self {
        Self { value, children }
    }

    /// Maps every node, visiting parents before children and children in order.
    pub fn map<U, F>(self, function: &mut F) -> Tree<U>
    where
        F: FnMut(T) -> U,
    {
        let value = function(self.value);
        let children = self
            .children
            .into_iter()
            .map(|child| child.map(function))
            .collect();
        Tree { value, children }
    }

    /// Node values in pre-order.
    pub fn pre_order(&self) -> Vec<&T> {
        std::iter::once(&self.value)
            .chain(self.children.iter().flat_map(Self::pre_order))
            .collect()
    }
}
