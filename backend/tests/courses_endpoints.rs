//! End-to-end behaviour of the course routes through the public router.

mod support;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use courses_backend::Trace;
use courses_backend::domain::TRACE_ID_HEADER;
use courses_backend::inbound::http::configure;
use courses_backend::inbound::http::state::HttpState;
use rstest::rstest;
use serde_json::{Value, json};

use support::{ready_health, seeded};

fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(ready_health())
        .wrap(Trace)
        .configure(configure)
}

struct Reply {
    status: StatusCode,
    trace_id: Option<String>,
    body: Value,
}

async fn call<S, R, B>(service: &S, request: R) -> Reply
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(service, request).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply {
        status,
        trace_id,
        body,
    }
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("course array")
        .iter()
        .filter_map(|course| course["courseid"].as_str().map(str::to_owned))
        .collect()
}

#[actix_web::test]
async fn home_page_is_html() {
    let (_, state) = seeded();
    let service = test::init_service(app(state)).await;

    let response =
        test::call_service(&service, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body = test::read_body(response).await;
    assert_eq!(
        body.as_ref(),
        b"<h1>Welcome to the home page of courses application!</h1>"
    );
}

#[actix_web::test]
async fn startup_lists_exactly_the_seeded_courses() {
    let (_, state) = seeded();
    let service = test::init_service(app(state)).await;

    let reply = call(&service, test::TestRequest::get().uri("/courses").to_request()).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.body,
        json!([
            {
                "courseid": "1",
                "coursename": "Go Language",
                "price": 199,
                "author": {"fullname": "John Doe", "website": "https://www.johndoe.com"}
            },
            {
                "courseid": "2",
                "coursename": "Javascript",
                "price": 499,
                "author": {"fullname": "Subash Choudhary", "website": "https://www.chaiwithcode.com"}
            }
        ])
    );
}

#[rstest]
#[case("/course/1", StatusCode::OK)]
#[case("/course/999", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn get_course_by_id(#[case] uri: &str, #[case] expected: StatusCode) {
    let (_, state) = seeded();
    let service = test::init_service(app(state)).await;

    let reply = call(&service, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(reply.status, expected);
    if expected == StatusCode::OK {
        assert_eq!(reply.body["coursename"], "Go Language");
    } else {
        assert_eq!(reply.body["message"], "No course found with id: 999");
        assert_eq!(reply.body["traceId"].as_str(), reply.trace_id.as_deref());
    }
}

#[actix_web::test]
async fn course_lifecycle_keeps_collection_consistent() {
    let (store, state) = seeded();
    let service = test::init_service(app(state)).await;

    let created = call(
        &service,
        test::TestRequest::post()
            .uri("/course/create")
            .set_json(json!({"coursename": "Rust", "price": 299}))
            .to_request(),
    )
    .await;
    assert_eq!(created.status, StatusCode::OK);
    let new_id = created.body["courseid"]
        .as_str()
        .expect("server id")
        .to_owned();
    assert!(!new_id.is_empty());
    assert_eq!(created.body["coursename"], "Rust");
    assert_eq!(created.body["price"], 299);
    assert_eq!(store.len().expect("readable store"), 3);

    let rejected = call(
        &service,
        test::TestRequest::post()
            .uri("/course/create")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["message"], "Json data is empty");
    assert_eq!(store.len().expect("readable store"), 3);

    let malformed = call(
        &service,
        test::TestRequest::post()
            .uri("/course/create")
            .insert_header(header::ContentType::json())
            .set_payload("{\"coursename\":")
            .to_request(),
    )
    .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["message"], "invalid request body");

    let updated = call(
        &service,
        test::TestRequest::put()
            .uri("/course/update/1")
            .set_json(json!({"coursename": "Go Advanced", "price": 249}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["courseid"], "1");
    assert_eq!(updated.body["coursename"], "Go Advanced");

    let listed = call(&service, test::TestRequest::get().uri("/courses").to_request()).await;
    assert_eq!(ids(&listed.body), ["1", "2", new_id.as_str()]);

    let deleted = call(
        &service,
        test::TestRequest::delete()
            .uri("/course/delete/1")
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body, json!("deleted successfully"));

    let gone = call(&service, test::TestRequest::get().uri("/course/1").to_request()).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "No course found with id: 1");

    let again = call(
        &service,
        test::TestRequest::delete()
            .uri("/course/delete/1")
            .to_request(),
    )
    .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let listed = call(&service, test::TestRequest::get().uri("/courses").to_request()).await;
    assert_eq!(ids(&listed.body), ["2", new_id.as_str()]);
}

#[actix_web::test]
async fn health_probes_report_ready() {
    let (_, state) = seeded();
    let service = test::init_service(app(state)).await;

    for uri in ["/health/ready", "/health/live"] {
        let response =
            test::call_service(&service, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
    }
}
