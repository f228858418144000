//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{App, web};
use argon2::Params;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{
    AccessTokenIssuer, MockAccessTokenVerifier, MockContactsCommand, MockContactsQuery,
    MockLoginService, MockRegistrationService, MockUsersQuery,
};
use crate::domain::{AccountService, ContactService, UserId};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{configure, route_not_found};
use crate::outbound::persistence::{InMemoryContactRepository, InMemoryUserRepository};
use crate::outbound::security::{Argon2PasswordHasher, JwtAccessTokens};

/// Secret shared by test token codecs.
pub const TEST_SECRET: &[u8] = b"agenda-test-secret-agenda-test-s";

/// Argon2id with the smallest legal cost so tests stay fast.
pub fn cheap_hasher() -> Argon2PasswordHasher {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
    Argon2PasswordHasher::with_params(params)
}

/// Fully wired HTTP state over fresh in-memory stores.
pub struct TestContext {
    state: web::Data<HttpState>,
    tokens: Arc<JwtAccessTokens>,
}

impl TestContext {
    /// Context whose tokens are signed with `secret`.
    pub fn with_secret(secret: &[u8]) -> Self {
        let tokens = Arc::new(JwtAccessTokens::new(
            secret,
            chrono::Duration::hours(1),
            Arc::new(DefaultClock),
        ));
        let accounts = Arc::new(AccountService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(cheap_hasher()),
            tokens.clone(),
        ));
        let contacts = Arc::new(ContactService::new(Arc::new(
            InMemoryContactRepository::new(),
        )));
        let state = HttpState::new(HttpStatePorts {
            registration: accounts.clone(),
            login: accounts.clone(),
            users: accounts,
            contacts: contacts.clone(),
            contacts_query: contacts,
            tokens: tokens.clone(),
        });
        Self {
            state: web::Data::new(state),
            tokens,
        }
    }

    /// Shared handler state.
    pub fn state(&self) -> web::Data<HttpState> {
        self.state.clone()
    }

    /// Signed token for `user`, valid for an hour.
    pub fn token_for(&self, user: &UserId) -> String {
        self.tokens
            .issue(user)
            .expect("token issues")
            .into_string()
    }

    /// Application with every route, the tracing middleware and the 404
    /// fallback, as the server assembles it.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        app_with(self.state())
    }
}

/// Application over `state`, assembled as the server does it.
pub fn app_with(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(route_not_found))
}

/// Driving-port mocks for handler tests that stub the use-cases.
///
/// Set expectations on the fields, then call [`MockedPorts::app`]. Any port
/// left untouched panics if a handler reaches it.
pub struct MockedPorts {
    /// Stands in for [`HttpState::registration`].
    pub registration: MockRegistrationService,
    /// Stands in for [`HttpState::login`].
    pub login: MockLoginService,
    /// Stands in for [`HttpState::users`].
    pub users: MockUsersQuery,
    /// Stands in for [`HttpState::contacts`].
    pub contacts: MockContactsCommand,
    /// Stands in for [`HttpState::contacts_query`].
    pub contacts_query: MockContactsQuery,
    /// Stands in for [`HttpState::tokens`].
    pub tokens: MockAccessTokenVerifier,
}

impl MockedPorts {
    /// Application wired to these mocks.
    pub fn app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        app_with(self.into_state())
    }

    /// Handler state backed by these mocks.
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            registration: Arc::new(self.registration),
            login: Arc::new(self.login),
            users: Arc::new(self.users),
            contacts: Arc::new(self.contacts),
            contacts_query: Arc::new(self.contacts_query),
            tokens: Arc::new(self.tokens),
        }))
    }
}

/// Mocks with no expectations.
#[fixture]
pub fn mocked_ports() -> MockedPorts {
    MockedPorts {
        registration: MockRegistrationService::new(),
        login: MockLoginService::new(),
        users: MockUsersQuery::new(),
        contacts: MockContactsCommand::new(),
        contacts_query: MockContactsQuery::new(),
        tokens: MockAccessTokenVerifier::new(),
    }
}

/// Fresh context per test.
#[fixture]
pub fn test_context() -> TestContext {
    TestContext::with_secret(TEST_SECRET)
}

/// Call `app` and decode the JSON response body.
pub async fn call_json<S, R, B>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}
