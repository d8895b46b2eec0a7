//! Courses backend library.
//!
//! Hexagonal layout: `domain` holds the course model, ports, and service;
//! `inbound::http` adapts actix-web requests onto the driving ports;
//! `outbound::memory` implements the storage port in process memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
