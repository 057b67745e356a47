#![cfg(all(feature = "serde", feature = "control", feature = "record"))]
//! Integration tests for serde support.

use functional_core::control::{Either, Empty, Maybe, Wrapper};
use functional_core::record::{Path, Record, Value, deep_freeze};
use rstest::rstest;

// =============================================================================
// Containers
// =============================================================================

#[rstest]
fn either_json_roundtrip() {
    let left: Either<String, i32> = Either::left("error".to_string());
    let right: Either<String, i32> = Either::right(42);

    let restored_left: Either<String, i32> =
        serde_json::from_str(&serde_json::to_string(&left).unwrap()).unwrap();
    let restored_right: Either<String, i32> =
        serde_json::from_str(&serde_json::to_string(&right).unwrap()).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
#[case(Maybe::just(7))]
#[case(Maybe::nothing())]
fn maybe_json_roundtrip(#[case] maybe: Maybe<i32>) {
    let json = serde_json::to_string(&maybe).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(maybe, restored);
}

#[rstest]
fn wrapper_serializes_transparently_as_newtype() {
    let json = serde_json::to_string(&Wrapper::of("Get Functional")).unwrap();
    assert_eq!(json, "\"Get Functional\"");
    let restored: Wrapper<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.into_inner(), "Get Functional");

    let empty: Empty = serde_json::from_str(&serde_json::to_string(&Empty).unwrap()).unwrap();
    assert_eq!(empty, Empty);
}

// =============================================================================
// Records
// =============================================================================

#[rstest]
fn record_serializes_as_object() {
    let zip = Record::from_fields([("code", "08544")]);
    let student = Record::from_fields([
        ("name", Value::from("Alonzo")),
        ("grades", Value::from(vec![80, 90])),
        ("zip", zip.into()),
        ("graduated", Value::from(true)),
        ("advisor", Value::Null),
    ]);

    let json: serde_json::Value = serde_json::to_value(&student).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "advisor": null,
            "grades": [80.0, 90.0],
            "graduated": true,
            "name": "Alonzo",
            "zip": { "code": "08544" }
        })
    );
}

#[rstest]
fn frozen_record_deserializes_unfrozen() {
    let original = deep_freeze(&Record::from_fields([("ssn", "444-44-4444")]));
    let json = serde_json::to_string(&original).unwrap();

    let restored: Record = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert!(!restored.is_frozen());
    assert!(restored.set("ssn", "000-00-0000").is_ok());
}

#[rstest]
fn nested_json_becomes_nested_records() {
    let restored: Record =
        serde_json::from_str(r#"{"address": {"zip": {"code": "08544"}}, "tags": ["a", 1]}"#).unwrap();

    let zip = restored
        .get("address")
        .and_then(|address| address.as_record().and_then(|record| record.get("zip")));
    assert_eq!(
        zip.and_then(|value| value.as_record().and_then(|record| record.get("code"))),
        Some(Value::from("08544"))
    );
    assert_eq!(
        restored.get("tags"),
        Some(Value::List(vec![Value::from("a"), Value::from(1)]))
    );
}

#[rstest]
fn paths_roundtrip() {
    let path = Path::root().key("grades").index(1);
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#"["grades",1]"#);
    let restored: Path = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, path);
}
