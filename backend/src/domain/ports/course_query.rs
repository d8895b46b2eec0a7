//! Driving port for course reads.
//!
//! Inbound adapters use this port to fetch courses without importing the
//! storage adapter.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error};

/// Domain use-case port for reading courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseQuery: Send + Sync {
    /// All courses in insertion order.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;

    /// A single course, or a not-found error.
    async fn get_course(&self, id: &CourseId) -> Result<Course, Error>;
}
