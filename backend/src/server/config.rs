//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use courses_backend::outbound::memory::InMemoryCourseRepository;

/// Everything `create_server` needs to bind and serve.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) courses: Arc<InMemoryCourseRepository>,
}

impl ServerConfig {
    /// Construct a server configuration over an existing course store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, courses: Arc<InMemoryCourseRepository>) -> Self {
        Self { bind_addr, courses }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
