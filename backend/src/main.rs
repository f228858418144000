//! Backend entry-point: loads settings and the signing key, then serves the
//! REST API and its OpenAPI docs.

mod server;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use agenda_backend::inbound::http::token_config::fingerprint::key_fingerprint;
use agenda_backend::inbound::http::token_config::{BuildMode, token_settings_from_env};
use agenda_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let tokens = token_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %key_fingerprint(&tokens.key),
        source = ?tokens.source,
        "token signing key loaded"
    );

    let config = ServerConfig::new(settings.bind_addr(), tokens.key, settings.token_ttl())
        .with_demo_user(settings.seed_demo_user());
    create_server(config).await?.await
}
