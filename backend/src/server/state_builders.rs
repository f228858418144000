//! Builders for HTTP state ports and the demo account.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use agenda_backend::domain::ports::RegistrationService;
use agenda_backend::domain::{AccountService, ContactService, Error, User, UserRegistration};
use agenda_backend::inbound::http::state::{HttpState, HttpStatePorts};
use agenda_backend::outbound::persistence::{InMemoryContactRepository, InMemoryUserRepository};
use agenda_backend::outbound::security::{Argon2PasswordHasher, JwtAccessTokens};

use super::ServerConfig;

const DEMO_NAME: &str = "usuario1";
const DEMO_PHONE: &str = "51992413404";
const DEMO_EMAIL: &str = "usuario1@gmail.com";
const DEMO_LOGIN: &str = "usuario1";
const DEMO_PASSWORD: &str = "senha123";

/// Wire the account and contact services over fresh in-memory stores.
///
/// The signing key is copied into the token codec; the caller's copy is
/// zeroized when the configuration is dropped.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let tokens = Arc::new(JwtAccessTokens::new(
        config.signing_key.as_bytes(),
        config.token_ttl,
        Arc::new(DefaultClock),
    ));
    let accounts = Arc::new(AccountService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2PasswordHasher::new()),
        tokens.clone(),
    ));
    let contacts = Arc::new(ContactService::new(Arc::new(
        InMemoryContactRepository::new(),
    )));

    HttpState::new(HttpStatePorts {
        registration: accounts.clone(),
        login: accounts.clone(),
        users: accounts,
        contacts: contacts.clone(),
        contacts_query: contacts,
        tokens,
    })
}

/// Register the demo account through the normal registration path.
pub(super) async fn seed_demo_user(registration: &dyn RegistrationService) -> Result<User, Error> {
    let demo = UserRegistration::try_from_parts(
        DEMO_NAME,
        DEMO_PHONE,
        DEMO_EMAIL,
        DEMO_LOGIN,
        DEMO_PASSWORD,
    )
    .map_err(|err| Error::internal(format!("invalid demo user: {err}")))?;
    let user = registration.register(demo).await?;
    info!(user_id = %user.id(), login = user.login(), "seeded demo user");
    Ok(user)
}
