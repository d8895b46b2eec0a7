//! Domain ports for the hexagonal boundary.

mod course_command;
mod course_query;
mod course_repository;

#[cfg(test)]
pub use course_command::MockCourseCommand;
pub use course_command::CourseCommand;
#[cfg(test)]
pub use course_query::MockCourseQuery;
pub use course_query::CourseQuery;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
