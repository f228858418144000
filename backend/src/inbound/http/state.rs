//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccessTokenVerifier, ContactsCommand, ContactsQuery, LoginService, RegistrationService,
    UsersQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Account registration.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential check and token issue.
    pub login: Arc<dyn LoginService>,
    /// Public user listing.
    pub users: Arc<dyn UsersQuery>,
    /// Contact mutations.
    pub contacts: Arc<dyn ContactsCommand>,
    /// Contact reads.
    pub contacts_query: Arc<dyn ContactsQuery>,
    /// Bearer token verification for [`crate::middleware::BearerAuth`].
    pub tokens: Arc<dyn AccessTokenVerifier>,
}

/// Dependency bundle for HTTP handlers and the bearer-token middleware.
#[derive(Clone)]
pub struct HttpState {
    /// Account registration.
    pub registration: Arc<dyn RegistrationService>,
    /// Credential check and token issue.
    pub login: Arc<dyn LoginService>,
    /// Public user listing.
    pub users: Arc<dyn UsersQuery>,
    /// Contact mutations.
    pub contacts: Arc<dyn ContactsCommand>,
    /// Contact reads.
    pub contacts_query: Arc<dyn ContactsQuery>,
    /// Bearer token verification for [`crate::middleware::BearerAuth`].
    pub tokens: Arc<dyn AccessTokenVerifier>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use agenda_backend::domain::{AccountService, ContactService};
    /// use agenda_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use agenda_backend::outbound::persistence::{
    ///     InMemoryContactRepository, InMemoryUserRepository,
    /// };
    /// use agenda_backend::outbound::security::{Argon2PasswordHasher, JwtAccessTokens};
    /// use mockable::DefaultClock;
    ///
    /// let tokens = Arc::new(JwtAccessTokens::new(
    ///     b"0123456789abcdef0123456789abcdef",
    ///     chrono::Duration::hours(1),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let accounts = Arc::new(AccountService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(Argon2PasswordHasher::new()),
    ///     tokens.clone(),
    /// ));
    /// let contacts = Arc::new(ContactService::new(Arc::new(InMemoryContactRepository::new())));
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     registration: accounts.clone(),
    ///     login: accounts.clone(),
    ///     users: accounts,
    ///     contacts: contacts.clone(),
    ///     contacts_query: contacts,
    ///     tokens,
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            registration,
            login,
            users,
            contacts,
            contacts_query,
            tokens,
        } = ports;
        Self {
            registration,
            login,
            users,
            contacts,
            contacts_query,
            tokens,
        }
    }
}
