//! Backend entry-point: loads settings, seeds the course store, and serves
//! the REST endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use courses_backend::inbound::http::health::HealthState;
use courses_backend::settings::ServiceSettings;
use server::{ServerConfig, build_course_store, create_server, drain};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().map_err(|e| {
        error!(error = %e, "failed to load configuration");
        std::io::Error::other(format!("configuration error: {e}"))
    })?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        error!(error = %e, "invalid bind address");
        std::io::Error::other(e)
    })?;

    let courses = build_course_store(&settings);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, courses))
        .inspect_err(|e| error!(error = %e, %bind_addr, "failed to bind"))?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match actix_web::rt::signal::ctrl_c().await {
            Ok(()) => drain(health_state, handle).await,
            Err(e) => warn!(error = %e, "shutdown signal listener unavailable"),
        }
    });
    server.await
}
