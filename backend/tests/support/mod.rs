//! Shared helpers for course endpoint integration tests.

use std::sync::Arc;

use actix_web::web;
use courses_backend::inbound::http::health::HealthState;
use courses_backend::inbound::http::state::HttpState;
use courses_backend::outbound::memory::{IdStrategy, InMemoryCourseRepository};

/// Store and HTTP state sharing one seeded repository.
pub(crate) fn seeded() -> (Arc<InMemoryCourseRepository>, web::Data<HttpState>) {
    let store = Arc::new(InMemoryCourseRepository::seeded(IdStrategy::Sequential));
    let state = web::Data::new(HttpState::from_repository(Arc::clone(&store)));
    (store, state)
}

/// Health state already marked ready.
pub(crate) fn ready_health() -> web::Data<HealthState> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    health
}
