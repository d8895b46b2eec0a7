//! Courses present in a freshly started store.

use tracing::error;

use crate::domain::{Author, Course, CourseDraft, CourseId, CourseName, CourseValidationError};

struct SeedCourse {
    id: &'static str,
    name: &'static str,
    price: i64,
    author: (&'static str, &'static str),
}

const SEED_COURSES: [SeedCourse; 2] = [
    SeedCourse {
        id: "1",
        name: "Go Language",
        price: 199,
        author: ("John Doe", "https://www.johndoe.com"),
    },
    SeedCourse {
        id: "2",
        name: "Javascript",
        price: 499,
        author: ("Subash Choudhary", "https://www.chaiwithcode.com"),
    },
];

fn build_seed(seed: &SeedCourse) -> Result<Course, CourseValidationError> {
    let id = CourseId::new(seed.id)?;
    let name = CourseName::new(seed.name)?;
    let (full_name, website) = seed.author;
    Ok(CourseDraft::new(name, seed.price, Some(Author::new(full_name, website))).into_course(id))
}

fn seed_course(seed: &SeedCourse) -> Option<Course> {
    build_seed(seed)
        .inspect_err(|err| error!(id = seed.id, name = seed.name, %err, "skipping invalid seed course"))
        .ok()
}

/// The two fixture courses, in insertion order.
///
/// A seed record that fails validation is logged and left out.
#[must_use]
pub fn seed_courses() -> Vec<Course> {
    SEED_COURSES.iter().filter_map(seed_course).collect()
}
