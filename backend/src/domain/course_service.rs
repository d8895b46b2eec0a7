//! Course domain service.
//!
//! Implements both course driving ports over a [`CourseRepository`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{CourseCommand, CourseQuery, CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseDraft, CourseId, Error};

/// Message returned whenever a course id matches nothing.
///
/// # Examples
/// ```
/// use courses_backend::domain::{CourseId, not_found_message};
///
/// let id = CourseId::new("999").expect("valid id");
/// assert_eq!(not_found_message(&id), "No course found with id: 999");
/// ```
#[must_use]
pub fn not_found_message(id: impl fmt::Display) -> String {
    format!("No course found with id: {id}")
}

fn course_not_found(id: &CourseId) -> Error {
    Error::not_found(not_found_message(id))
}

fn map_repository_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Poisoned { message } => {
            Error::internal(format!("course store unavailable: {message}"))
        }
        CourseRepositoryError::IdExhausted => {
            Error::internal("course identifier space exhausted")
        }
    }
}

/// Course service implementing [`CourseQuery`] and [`CourseCommand`].
#[derive(Clone)]
pub struct CourseService<R> {
    courses: Arc<R>,
}

impl<R> CourseService<R> {
    /// Create a service over the given repository.
    pub fn new(courses: Arc<R>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl<R> CourseQuery for CourseService<R>
where
    R: CourseRepository,
{
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        let courses = self.courses.list().await.map_err(map_repository_error)?;
        debug!(count = courses.len(), "listed courses");
        Ok(courses)
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| course_not_found(id))
    }
}

#[async_trait]
impl<R> CourseCommand for CourseService<R>
where
    R: CourseRepository,
{
    async fn create_course(&self, draft: CourseDraft) -> Result<Course, Error> {
        let course = self
            .courses
            .insert(draft)
            .await
            .map_err(map_repository_error)?;
        info!(course_id = %course.id(), "course created");
        Ok(course)
    }

    async fn update_course(&self, id: &CourseId, draft: CourseDraft) -> Result<Course, Error> {
        match self
            .courses
            .replace(id, draft)
            .await
            .map_err(map_repository_error)?
        {
            Some(course) => {
                info!(course_id = %id, "course replaced");
                Ok(course)
            }
            None => {
                warn!(course_id = %id, "update for unknown course");
                Err(course_not_found(id))
            }
        }
    }

    async fn delete_course(&self, id: &CourseId) -> Result<(), Error> {
        match self.courses.remove(id).await.map_err(map_repository_error)? {
            Some(_) => {
                info!(course_id = %id, "course deleted");
                Ok(())
            }
            None => Err(course_not_found(id)),
        }
    }
}

#[cfg(test)]
#[path = "course_service_tests.rs"]
mod tests;
