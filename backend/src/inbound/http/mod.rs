//! HTTP inbound adapter exposing the course REST endpoints.

use actix_web::web;

pub mod courses;
pub mod error;
pub mod health;
pub mod home;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register every HTTP route served by the application.
///
/// Handlers expect `web::Data<state::HttpState>` and
/// `web::Data<health::HealthState>` to be registered as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use courses_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home::serve_home)
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(courses::create_course)
        .service(courses::update_course)
        .service(courses::delete_course)
        .service(health::ready)
        .service(health::live);
}
