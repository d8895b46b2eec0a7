//! Tests for course validation and serialisation.

use super::*;
use rstest::rstest;
use serde_json::{Value, json};

fn sample_course() -> Course {
    CourseDraft::new(
        CourseName::new("Go Language").expect("valid name"),
        199,
        Some(Author::new("John Doe", "https://www.johndoe.com")),
    )
    .into_course(CourseId::new("1").expect("valid id"))
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_ids_are_rejected(#[case] raw: &str) {
    assert_eq!(CourseId::new(raw), Err(CourseValidationError::EmptyId));
}

#[rstest]
#[case("")]
#[case("  ")]
fn blank_names_are_rejected(#[case] raw: &str) {
    assert_eq!(CourseName::new(raw), Err(CourseValidationError::EmptyName));
}

#[test]
fn names_keep_surrounding_whitespace() {
    let name = CourseName::new(" Rust ").expect("valid name");
    assert_eq!(name.as_ref(), " Rust ");
}

#[rstest]
#[case("7", Some(7))]
#[case("0042", Some(42))]
#[case("+5", None)]
#[case("abc", None)]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", None)]
#[case("99999999999999999999999", None)]
fn sequence_number_only_reads_plain_decimals(#[case] raw: &str, #[case] expected: Option<u64>) {
    let id = CourseId::new(raw).expect("valid id");
    assert_eq!(id.sequence_number(), expected);
}

#[test]
fn serialises_with_wire_field_names() {
    let value = serde_json::to_value(sample_course()).expect("serialise course");
    assert_eq!(
        value,
        json!({
            "courseid": "1",
            "coursename": "Go Language",
            "price": 199,
            "author": {
                "fullname": "John Doe",
                "website": "https://www.johndoe.com"
            }
        })
    );
}

#[test]
fn missing_author_serialises_as_null() {
    let course = CourseDraft::new(CourseName::new("Rust").expect("valid name"), 299, None)
        .into_course(CourseId::new("3").expect("valid id"));
    let value = serde_json::to_value(course).expect("serialise course");
    assert_eq!(value.get("author"), Some(&Value::Null));
}

#[test]
fn deserialising_rejects_empty_names() {
    let result = serde_json::from_value::<Course>(json!({
        "courseid": "1",
        "coursename": "",
        "price": 1,
        "author": null
    }));
    assert!(result.is_err());
}

#[test]
fn deserialising_round_trips_a_stored_course() {
    let course = sample_course();
    let value = serde_json::to_value(&course).expect("serialise course");
    let decoded: Course = serde_json::from_value(value).expect("deserialise course");
    assert_eq!(decoded, course);
}
