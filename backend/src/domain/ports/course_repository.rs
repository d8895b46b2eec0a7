//! Driven port for course storage.
//!
//! The repository owns identifier allocation: `insert` assigns the id under
//! the same guard as the mutation, so concurrent inserts never collide.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId};

/// Errors raised by course repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseRepositoryError {
    /// A writer panicked while holding the store guard.
    #[error("course store lock poisoned: {message}")]
    Poisoned {
        /// Description of the poisoned guard.
        message: String,
    },
    /// The identifier counter cannot advance any further.
    #[error("course identifier space exhausted")]
    IdExhausted,
}

impl CourseRepositoryError {
    /// Construct a [`CourseRepositoryError::Poisoned`] error.
    pub fn poisoned(message: impl Into<String>) -> Self {
        Self::Poisoned {
            message: message.into(),
        }
    }
}

/// Port for reading and mutating the ordered course collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every stored course in insertion order.
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError>;

    /// Find a course by id.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Allocate an id for `draft` and append it.
    async fn insert(&self, draft: CourseDraft) -> Result<Course, CourseRepositoryError>;

    /// Replace the course stored under `id` in place.
    ///
    /// Returns `None` without storing anything when no such course exists.
    async fn replace(
        &self,
        id: &CourseId,
        draft: CourseDraft,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// Remove the course stored under `id`, keeping the order of the rest.
    async fn remove(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_constructor_accepts_str() {
        let err = CourseRepositoryError::poisoned("writer panicked");
        assert_eq!(
            err.to_string(),
            "course store lock poisoned: writer panicked"
        );
    }

    #[test]
    fn exhausted_error_has_stable_message() {
        assert_eq!(
            CourseRepositoryError::IdExhausted.to_string(),
            "course identifier space exhausted"
        );
    }
}
