//! Landing page handler.

use actix_web::{HttpResponse, get, http::header::ContentType};

/// HTML fragment served at the root path.
pub const WELCOME_HTML: &str = "<h1>Welcome to the home page of courses application!</h1>";

/// Serve the welcome fragment.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page", content_type = "text/html", body = String)
    ),
    tags = ["home"],
    operation_id = "serveHome"
)]
#[get("/")]
pub async fn serve_home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME_HTML)
}
