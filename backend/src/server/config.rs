//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use agenda_backend::inbound::http::token_config::SigningKey;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) signing_key: SigningKey,
    pub(crate) token_ttl: chrono::Duration,
    pub(crate) seed_demo_user: bool,
}

impl ServerConfig {
    /// Construct a server configuration; the demo user is seeded by default.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, signing_key: SigningKey, token_ttl: chrono::Duration) -> Self {
        Self {
            bind_addr,
            signing_key,
            token_ttl,
            seed_demo_user: true,
        }
    }

    /// Enable or disable registering the demo user at startup.
    #[must_use]
    pub fn with_demo_user(mut self, enabled: bool) -> Self {
        self.seed_demo_user = enabled;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
