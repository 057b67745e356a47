#![cfg(feature = "derive")]
//! Tests for `#[derive(Lenses)]`.
//!
//! The generated `{field}_lens()` functions must behave exactly like
//! hand-written lenses: they obey the lens laws and compose.

use functional_core::optics::{Lens, Lenses, over, set, view};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct ZipCode {
    code: String,
    location: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    country: String,
    zip: ZipCode,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Person {
    ssn: String,
    first: String,
    last: String,
    address: Address,
}

/// Student extends person data with a school and grades.
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Student {
    person: Person,
    school: String,
    grades: Vec<u32>,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Tagged<T> {
    tag: String,
    value: T,
}

fn alonzo() -> Student {
    Student {
        person: Person {
            ssn: "444-44-4444".to_string(),
            first: "Alonzo".to_string(),
            last: "Church".to_string(),
            address: Address {
                street: "Alexander St".to_string(),
                country: "US".to_string(),
                zip: ZipCode {
                    code: "08544".to_string(),
                    location: "3345".to_string(),
                },
            },
        },
        school: "Princeton".to_string(),
        grades: vec![80, 90, 100],
    }
}

// =============================================================================
// Generated lenses
// =============================================================================

#[rstest]
fn generated_lens_reads_field() {
    let student = alonzo();
    assert_eq!(Student::school_lens().get(&student), "Princeton");
    assert_eq!(view(&Student::grades_lens(), &student), &vec![80, 90, 100]);
}

#[rstest]
fn zip_code_lens_reads_code() {
    let zip = ZipCode {
        code: "08544".into(),
        location: "3345".into(),
    };
    assert_eq!(ZipCode::code_lens().get(&zip), "08544");
    assert_eq!(ZipCode::location_lens().get(&zip), "3345");
}

#[rstest]
fn generated_lens_writes_copy() {
    let student = alonzo();
    let moved = set(&Student::school_lens(), "Harvard".to_string(), student.clone());
    assert_eq!(moved.school, "Harvard");
    assert_eq!(student, alonzo());
}

#[rstest]
fn generated_lenses_compose_deeply() {
    let zip_code = Student::person_lens()
        .compose(Person::address_lens())
        .compose(Address::zip_lens())
        .compose(ZipCode::code_lens());

    let student = alonzo();
    assert_eq!(zip_code.get(&student), "08544");

    let moved = zip_code.set(student, "90210".to_string());
    assert_eq!(moved.person.address.zip.code, "90210");
    assert_eq!(moved.person.address.zip.location, "3345");
    assert_eq!(moved.person.address.street, "Alexander St");
}

#[rstest]
#[case("Church", "CHURCH")]
#[case("church", "CHURCH")]
fn over_through_composed_lens(#[case] last: &str, #[case] expected: &str) {
    let last_name = Student::person_lens().compose(Person::last_lens());
    let student = last_name.set(alonzo(), last.to_string());
    let shouted = over(&last_name, |name| name.to_uppercase(), student);
    assert_eq!(shouted.person.last, expected);
}

#[rstest]
fn generic_structs_get_lenses() {
    let tagged = Tagged {
        tag: "grade".to_string(),
        value: 90_u32,
    };
    let value = Tagged::<u32>::value_lens();
    assert_eq!(*value.get(&tagged), 90);
    assert_eq!(value.modify(tagged, |grade| grade + 5).value, 95);
}

#[rstest]
fn generated_lenses_obey_get_put() {
    let student = alonzo();
    let ssn = Student::person_lens().compose(Person::ssn_lens());
    let current = ssn.get(&student).clone();
    assert_eq!(ssn.set(student.clone(), current), student);
}
