//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COURSES_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::memory::IdStrategy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3500;

/// Errors raised when settings cannot be turned into a runnable server.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the courses HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSES")]
pub struct ServiceSettings {
    /// Interface to bind, defaulting to every IPv4 interface.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Start without the fixture courses.
    #[ortho_config(default = false)]
    pub empty_store: bool,
    /// Allocate UUID v4 course ids instead of the decimal counter.
    #[ortho_config(default = false)]
    pub uuid_ids: bool,
}

impl ServiceSettings {
    /// Configured host, falling back to `0.0.0.0`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to `3500`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address the server listens on.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Identifier allocation strategy for the course store.
    pub fn id_strategy(&self) -> IdStrategy {
        if self.uuid_ids {
            IdStrategy::Uuid
        } else {
            IdStrategy::Sequential
        }
    }
}
