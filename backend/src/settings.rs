//! Server settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `AGENDA_*` environment variables and an
//! optional configuration file. Token signing keys are not part of these
//! settings; see [`crate::inbound::http::token_config`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::security::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Configuration values controlling the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AGENDA")]
pub struct AppSettings {
    /// Address to bind; defaults to every interface.
    pub host: Option<IpAddr>,
    /// Port to bind; defaults to 3000.
    pub port: Option<u16>,
    /// Lifetime of issued access tokens in seconds; defaults to one hour.
    pub token_ttl_secs: Option<i64>,
    /// Skip registering the demo user at startup.
    #[ortho_config(default = false)]
    pub disable_demo_user: bool,
}

impl AppSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Token lifetime; non-positive values fall back to the default and
    /// longer values are capped at [`MAX_TOKEN_TTL_SECS`].
    pub fn token_ttl(&self) -> chrono::Duration {
        let secs = self
            .token_ttl_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS)
            .min(MAX_TOKEN_TTL_SECS);
        chrono::Duration::seconds(secs)
    }

    /// Whether the demo user should be registered at startup.
    pub fn seed_demo_user(&self) -> bool {
        !self.disable_demo_user
    }
}
