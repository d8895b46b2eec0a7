//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every course endpoint, the home page, and the health
//! probes, plus the schema wrappers from `inbound::http::schemas`. Swagger UI
//! serves it in debug builds and `cargo run --bin openapi-dump` prints it.

use crate::inbound::http::schemas::{AuthorSchema, CourseSchema, ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::validation::{AuthorRequest, CourseRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        description = "In-memory course catalogue with create, read, update, and delete endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::serve_home,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CourseSchema,
        AuthorSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CourseRequest,
        AuthorRequest
    )),
    tags(
        (name = "courses", description = "Course catalogue operations"),
        (name = "home", description = "Landing page"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/courses")]
    #[case("/course/{id}")]
    #[case("/course/create")]
    #[case("/course/update/{id}")]
    #[case("/course/delete/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn course_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let course = schemas.get("Course").expect("Course schema");
        for field in ["courseid", "coursename", "price", "author"] {
            assert_object_schema_has_field(course, field);
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");
        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }

    #[test]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("serialise");
        assert!(json.contains("createCourse"));
    }
}
