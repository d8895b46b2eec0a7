//! Request body decoding for course create and update.
//!
//! Bodies are decoded from raw bytes rather than through `web::Json` so the
//! service accepts JSON regardless of the declared content type and reports
//! each failure with its own message.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::{Author, CourseDraft, CourseName, CourseValidationError, Error};

/// Message for a request without a body.
pub const MISSING_BODY_MESSAGE: &str = "please send some data";
/// Message for a body that is not a course document.
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";
/// Message for a course document without a name.
pub const EMPTY_NAME_MESSAGE: &str = "Json data is empty";

const NOT_AN_OBJECT_REASON: &str = "expected a JSON object describing a course";

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingBody,
    InvalidJson,
    EmptyCourseName,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingBody => "missing_body",
            Self::InvalidJson => "invalid_json",
            Self::EmptyCourseName => "empty_course_name",
        }
    }
}

/// Course document accepted by `POST /course/create` and
/// `PUT /course/update/{id}`.
///
/// Missing fields default to empty values. Any `courseid` sent by the client
/// is accepted and ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CourseRequest {
    /// Ignored; the server owns course identifiers.
    #[schema(example = "")]
    pub courseid: String,
    /// Display name; must not be blank.
    #[schema(example = "Rust")]
    pub coursename: String,
    /// Price in whole currency units.
    #[schema(example = 299)]
    pub price: i64,
    /// Optional author; `null` or absent stores no author.
    pub author: Option<AuthorRequest>,
}

/// Author part of a [`CourseRequest`].
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct AuthorRequest {
    /// Author's full name.
    #[schema(example = "Ferris")]
    pub fullname: String,
    /// Author's website.
    #[schema(example = "https://rustacean.net")]
    pub website: String,
}

impl TryFrom<CourseRequest> for CourseDraft {
    type Error = CourseValidationError;

    fn try_from(value: CourseRequest) -> Result<Self, Self::Error> {
        let name = CourseName::new(value.coursename)?;
        let author = value
            .author
            .map(|author| Author::new(author.fullname, author.website));
        Ok(CourseDraft::new(name, value.price, author))
    }
}

fn missing_body_error() -> Error {
    Error::invalid_request(MISSING_BODY_MESSAGE)
        .with_details(json!({ "code": ErrorCode::MissingBody.as_str() }))
}

fn invalid_json_error(reason: &dyn fmt::Display) -> Error {
    Error::invalid_request(INVALID_BODY_MESSAGE).with_details(json!({
        "code": ErrorCode::InvalidJson.as_str(),
        "reason": reason.to_string(),
    }))
}

fn map_course_validation_error(err: CourseValidationError) -> Error {
    match err {
        CourseValidationError::EmptyName => Error::invalid_request(EMPTY_NAME_MESSAGE)
            .with_details(json!({
                "field": "coursename",
                "code": ErrorCode::EmptyCourseName.as_str(),
            })),
        other => Error::invalid_request(other.to_string()),
    }
}

/// Decode a create/update body into a validated [`CourseDraft`].
///
/// # Examples
/// ```
/// use courses_backend::inbound::http::validation::decode_course_body;
///
/// let draft = decode_course_body(br#"{"coursename":"Rust","price":299}"#)
///     .expect("valid course");
/// assert_eq!(draft.name().as_ref(), "Rust");
///
/// let err = decode_course_body(b"{}").expect_err("empty name");
/// assert_eq!(err.message(), "Json data is empty");
/// ```
///
/// # Errors
/// Returns an `invalid_request` [`Error`] when the body is empty, is not a
/// JSON object describing a course, or names no course.
pub fn decode_course_body(body: &[u8]) -> Result<CourseDraft, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(missing_body_error());
    }
    // Struct visitors also accept sequences, so arrays are turned away here.
    let document: Value = serde_json::from_slice(body).map_err(|err| invalid_json_error(&err))?;
    if !document.is_object() {
        return Err(invalid_json_error(&NOT_AN_OBJECT_REASON));
    }
    let request: CourseRequest =
        serde_json::from_value(document).map_err(|err| invalid_json_error(&err))?;
    CourseDraft::try_from(request).map_err(map_course_validation_error)
}
