//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::CourseService;
use crate::domain::ports::{CourseCommand, CourseQuery, CourseRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: listing and single-course lookup.
    pub courses: Arc<dyn CourseQuery>,
    /// Write side: create, update, and delete.
    pub course_commands: Arc<dyn CourseCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub fn new(courses: Arc<dyn CourseQuery>, course_commands: Arc<dyn CourseCommand>) -> Self {
        Self {
            courses,
            course_commands,
        }
    }

    /// Wire both course ports to a [`CourseService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use courses_backend::inbound::http::state::HttpState;
    /// use courses_backend::outbound::memory::{IdStrategy, InMemoryCourseRepository};
    ///
    /// let store = Arc::new(InMemoryCourseRepository::seeded(IdStrategy::Sequential));
    /// let _state = HttpState::from_repository(store);
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: CourseRepository + 'static,
    {
        let service = Arc::new(CourseService::new(repository));
        Self::new(service.clone(), service)
    }
}
