//! Driving port for course mutations.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId, Error};

/// Domain use-case port for creating, replacing, and deleting courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCommand: Send + Sync {
    /// Store a new course under a server-assigned id.
    async fn create_course(&self, draft: CourseDraft) -> Result<Course, Error>;

    /// Replace the course stored under `id`, keeping its position.
    async fn update_course(&self, id: &CourseId, draft: CourseDraft) -> Result<Course, Error>;

    /// Delete the course stored under `id`.
    async fn delete_course(&self, id: &CourseId) -> Result<(), Error>;
}
