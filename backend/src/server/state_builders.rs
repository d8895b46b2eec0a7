//! Builders for the course store and HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use courses_backend::inbound::http::state::HttpState;
use courses_backend::outbound::memory::InMemoryCourseRepository;
use courses_backend::settings::ServiceSettings;

/// Build the course store described by `settings`.
pub(crate) fn build_course_store(settings: &ServiceSettings) -> Arc<InMemoryCourseRepository> {
    let strategy = settings.id_strategy();
    let store = if settings.empty_store {
        InMemoryCourseRepository::new(strategy)
    } else {
        InMemoryCourseRepository::seeded(strategy)
    };
    info!(
        seeded = !settings.empty_store,
        id_strategy = ?strategy,
        "course store initialised"
    );
    Arc::new(store)
}

/// Wire the HTTP state onto the shared course store.
pub(crate) fn build_http_state(courses: &Arc<InMemoryCourseRepository>) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(Arc::clone(courses)))
}
