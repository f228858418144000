//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the wiring of in-memory stores, a fast Argon2 hasher and a fixed signing
//! key lives here once.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use actix_web::{App, web};
use agenda_backend::Trace;
use agenda_backend::domain::{AccountService, ContactService};
use agenda_backend::inbound::http::state::{HttpState, HttpStatePorts};
use agenda_backend::inbound::http::{configure, route_not_found};
use agenda_backend::outbound::persistence::{InMemoryContactRepository, InMemoryUserRepository};
use agenda_backend::outbound::security::{Argon2PasswordHasher, JwtAccessTokens};
use argon2::Params;
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

/// Signing secret used by every integration test.
pub const SECRET: &[u8] = b"integration-secret-integration-s";

/// Wire fresh stores and services; tokens read time from `clock`.
pub fn state_with_clock(clock: Arc<dyn Clock + Send + Sync>) -> web::Data<HttpState> {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
    let tokens = Arc::new(JwtAccessTokens::new(
        SECRET,
        chrono::Duration::hours(1),
        clock,
    ));
    let accounts = Arc::new(AccountService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(Argon2PasswordHasher::with_params(params)),
        tokens.clone(),
    ));
    let contacts = Arc::new(ContactService::new(Arc::new(
        InMemoryContactRepository::new(),
    )));
    web::Data::new(HttpState::new(HttpStatePorts {
        registration: accounts.clone(),
        login: accounts.clone(),
        users: accounts,
        contacts: contacts.clone(),
        contacts_query: contacts,
        tokens,
    }))
}

/// State over the system clock.
pub fn state() -> web::Data<HttpState> {
    state_with_clock(Arc::new(DefaultClock))
}

/// Application wired the way the server binary wires it, minus Swagger UI.
pub fn app(
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

/// Call the service and split the response into status and JSON body.
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = actix_test::call_service(app, req).await;
    let status = res.status();
    let bytes = actix_test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

/// Request carrying a bearer token.
pub fn authed(req: actix_test::TestRequest, token: &str) -> actix_test::TestRequest {
    req.insert_header((AUTHORIZATION, format!("Bearer {token}")))
}

/// Registration body for `login` with a derived email.
pub fn registration(login: &str, senha: &str) -> Value {
    json!({
        "nome": login,
        "telefone": "51999990000",
        "email": format!("{login}@example.com"),
        "login": login,
        "senha": senha,
    })
}

/// Register `login` and return a bearer token for it.
pub async fn register_and_login(state: &web::Data<HttpState>, login: &str, senha: &str) -> String {
    let app = actix_test::init_service(app(state.clone())).await;

    let register = actix_test::TestRequest::post()
        .uri("/usuarios/registro")
        .set_json(registration(login, senha))
        .to_request();
    let (status, _) = send(&app, register).await;
    assert_eq!(status, StatusCode::CREATED);

    let login_req = actix_test::TestRequest::post()
        .uri("/usuarios/login")
        .set_json(json!({ "login": login, "senha": senha }))
        .to_request();
    let (status, body) = send(&app, login_req).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("token issued").to_owned()
}
