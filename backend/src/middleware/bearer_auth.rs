//! Bearer-token authorization middleware.
//!
//! Wraps protected scopes: requests without a valid `Authorization: Bearer`
//! header are answered with `401` before reaching any handler. Accepted
//! requests carry an [`AuthenticatedUser`] in their extensions.

use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::Error as DomainError;
use crate::domain::messages::{TOKEN_INVALID, TOKEN_MISSING};
use crate::domain::ports::AccessTokenError;
use crate::inbound::http::auth::{AuthenticatedUser, bearer_token};
use crate::inbound::http::state::HttpState;

/// Why a request was turned away.
#[derive(Debug)]
enum Rejection {
    MissingToken,
    MalformedHeader,
    InvalidToken(AccessTokenError),
    MissingState,
}

impl Rejection {
    // Built inside the response future so the error picks up the trace id.
    fn into_error(self) -> DomainError {
        match self {
            Self::MissingToken => DomainError::unauthorized(TOKEN_MISSING),
            Self::MalformedHeader => {
                debug!("authorization header is not a bearer token");
                DomainError::unauthorized(TOKEN_INVALID)
            }
            Self::InvalidToken(error) => {
                debug!(%error, "bearer token rejected");
                DomainError::unauthorized(TOKEN_INVALID)
            }
            Self::MissingState => DomainError::internal("HTTP state not registered"),
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, Rejection> {
    // Only an absent or empty header counts as missing; anything else is a
    // token attempt and is judged as such.
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(Rejection::MissingToken)?;
    let token = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(Rejection::MalformedHeader)?;
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or(Rejection::MissingState)?;
    state
        .tokens
        .verify(token)
        .map(AuthenticatedUser::new)
        .map_err(Rejection::InvalidToken)
}

/// Middleware requiring a valid bearer token on every request it wraps.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use agenda_backend::middleware::BearerAuth;
///
/// let _scope = web::scope("/contatos").wrap(BearerAuth);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware { service }))
    }
}

/// Service wrapper produced by [`BearerAuth`].
pub struct BearerAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(rejection) => Box::pin(async move {
                let error = rejection.into_error();
                Ok(req.error_response(error).map_into_right_body())
            }),
        }
    }
}
