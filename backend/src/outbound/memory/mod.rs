//! In-memory course store.
//!
//! Courses live in an insertion-ordered map behind a `std::sync::RwLock`.
//! Every mutation, including identifier allocation, happens under the write
//! guard, and no guard is held across an `.await`.

mod fixtures;
mod id_sequence;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseDraft, CourseId};

pub use fixtures::seed_courses;
pub use id_sequence::IdStrategy;
use id_sequence::IdSequence;

#[derive(Debug)]
struct CourseTable {
    courses: IndexMap<CourseId, Course>,
    ids: IdSequence,
}

/// Process-local [`CourseRepository`] adapter.
///
/// # Examples
/// ```
/// use courses_backend::outbound::memory::{IdStrategy, InMemoryCourseRepository};
///
/// let store = InMemoryCourseRepository::seeded(IdStrategy::Sequential);
/// assert_eq!(store.len().expect("readable store"), 2);
/// ```
#[derive(Debug)]
pub struct InMemoryCourseRepository {
    table: RwLock<CourseTable>,
}

fn poisoned<T>(err: &PoisonError<T>) -> CourseRepositoryError {
    CourseRepositoryError::poisoned(err.to_string())
}

impl InMemoryCourseRepository {
    /// An empty store.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_courses(strategy, Vec::new())
    }

    /// A store holding `courses` in the given order.
    ///
    /// A later course replaces an earlier one with the same id in place.
    #[must_use]
    pub fn with_courses(strategy: IdStrategy, courses: Vec<Course>) -> Self {
        let courses: IndexMap<CourseId, Course> = courses
            .into_iter()
            .map(|course| (course.id().clone(), course))
            .collect();
        let ids = IdSequence::resume(strategy, courses.keys());
        Self {
            table: RwLock::new(CourseTable { courses, ids }),
        }
    }

    /// A store holding the fixture courses served at startup.
    #[must_use]
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::with_courses(strategy, seed_courses())
    }

    /// Number of stored courses.
    ///
    /// # Errors
    /// Returns [`CourseRepositoryError::Poisoned`] if a writer panicked.
    pub fn len(&self) -> Result<usize, CourseRepositoryError> {
        Ok(self.read()?.courses.len())
    }

    /// Whether the store holds no courses.
    ///
    /// # Errors
    /// Returns [`CourseRepositoryError::Poisoned`] if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, CourseRepositoryError> {
        Ok(self.read()?.courses.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CourseTable>, CourseRepositoryError> {
        self.table.read().map_err(|err| poisoned(&err))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CourseTable>, CourseRepositoryError> {
        self.table.write().map_err(|err| poisoned(&err))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.read()?.courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.read()?.courses.get(id).cloned())
    }

    async fn insert(&self, draft: CourseDraft) -> Result<Course, CourseRepositoryError> {
        let mut table = self.write()?;
        let mut id = table.ids.allocate()?;
        while table.courses.contains_key(&id) {
            id = table.ids.allocate()?;
        }
        let course = draft.into_course(id.clone());
        table.courses.insert(id, course.clone());
        Ok(course)
    }

    async fn replace(
        &self,
        id: &CourseId,
        draft: CourseDraft,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        let mut table = self.write()?;
        let Some(slot) = table.courses.get_mut(id) else {
            return Ok(None);
        };
        *slot = draft.into_course(id.clone());
        Ok(Some(slot.clone()))
    }

    async fn remove(&self, id: &CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.write()?.courses.shift_remove(id))
    }
}
