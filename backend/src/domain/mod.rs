//! Domain primitives, ports, and services.
//!
//! Purpose: define strongly typed course entities and the use-cases that
//! operate on them, independent of HTTP and storage concerns.
//!
//! Public surface:
//! - `Course`, `CourseDraft`, `CourseId`, `CourseName`, `Author`: the
//!   course model and its validated parts.
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `CourseService`: implements the course driving ports over a
//!   `ports::CourseRepository`.
//! - `TraceId`: request correlation identifier.

pub mod course;
pub mod course_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::course::{
    Author, Course, CourseDraft, CourseId, CourseName, CourseValidationError,
};
pub use self::course_service::{CourseService, not_found_message};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
