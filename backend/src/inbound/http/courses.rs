//! Course API handlers.
//!
//! ```text
//! GET    /courses
//! GET    /course/{id}
//! POST   /course/create        {"coursename":"Rust","price":299}
//! PUT    /course/update/{id}   {"coursename":"Rust","price":349}
//! DELETE /course/delete/{id}
//! ```

use actix_web::{delete, get, post, put, web};

use crate::domain::{Course, CourseId, Error, not_found_message};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CourseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{CourseRequest, decode_course_body};

/// Body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "deleted successfully";

/// A blank path segment can never name a stored course.
fn parse_course_id(raw: String) -> Result<CourseId, Error> {
    CourseId::new(raw.as_str()).map_err(|_| Error::not_found(not_found_message(&raw)))
}

/// List every course in insertion order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use courses_backend::inbound::http::courses::list_courses;
///
/// let app = App::new().service(list_courses);
/// ```
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = [CourseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    let courses = state.courses.list_courses().await?;
    Ok(web::Json(courses))
}

/// Fetch one course.
#[utoipa::path(
    get,
    path = "/course/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course", body = CourseSchema),
        (status = 404, description = "No such course", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/course/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    let id = parse_course_id(path.into_inner())?;
    let course = state.courses.get_course(&id).await?;
    Ok(web::Json(course))
}

/// Create a course; the server assigns its id.
#[utoipa::path(
    post,
    path = "/course/create",
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Created course", body = CourseSchema),
        (status = 400, description = "Missing, malformed, or nameless body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/course/create")]
pub async fn create_course(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<Course>> {
    let draft = decode_course_body(&body)?;
    let course = state.course_commands.create_course(draft).await?;
    Ok(web::Json(course))
}

/// Replace a course in place, keeping its id and position.
#[utoipa::path(
    put,
    path = "/course/update/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Updated course", body = CourseSchema),
        (status = 400, description = "Missing, malformed, or nameless body", body = ErrorSchema),
        (status = 404, description = "No such course", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/course/update/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<Course>> {
    let id = parse_course_id(path.into_inner())?;
    let draft = decode_course_body(&body)?;
    let course = state.course_commands.update_course(&id, draft).await?;
    Ok(web::Json(course))
}

/// Remove a course.
#[utoipa::path(
    delete,
    path = "/course/delete/{id}",
    params(("id" = String, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course removed", body = String),
        (status = 404, description = "No such course", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/course/delete/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<&'static str>> {
    let id = parse_course_id(path.into_inner())?;
    state.course_commands.delete_course(&id).await?;
    Ok(web::Json(DELETED_MESSAGE))
}
