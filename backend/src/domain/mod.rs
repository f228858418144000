//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter and the
//! in-memory stores, plus the services implementing the driving ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic error payload.
//! - [`User`], [`UserRegistration`], [`UserRecord`]: account data.
//! - [`LoginCredentials`], [`AccessToken`]: authentication values.
//! - [`Contact`], [`ContactInput`]: per-user address book entries.
//! - [`AccountService`], [`ContactService`]: driving-port implementations.

pub mod account_service;
pub mod auth;
pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{AccessToken, LoginCredentials, LoginValidationError};
pub use self::contact::{Contact, ContactDetails, ContactId, ContactInput, ContactValidationError};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{PasswordHash, User, UserId, UserRecord, UserRegistration, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use agenda_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Token não fornecido."))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing messages shared by services and handlers.
pub mod messages {
    /// A registration or contact field is empty.
    pub const REQUIRED_FIELDS: &str = "Todos os campos devem ser preenchidos.";
    /// The login or email is already registered.
    pub const USER_EXISTS: &str = "Usuário já cadastrado.";
    /// Login or password missing from a login request.
    pub const LOGIN_REQUIRED: &str = "Login e senha são obrigatórios.";
    /// Unknown login or wrong password.
    pub const INVALID_LOGIN: &str = "Login ou senha inválidos.";
    /// No `Authorization` header on a protected route.
    pub const TOKEN_MISSING: &str = "Token não fornecido.";
    /// Malformed, forged or expired bearer token.
    pub const TOKEN_INVALID: &str = "Token inválido.";
    /// No contact with that id is owned by the caller.
    pub const CONTACT_NOT_FOUND: &str = "Contato não encontrado.";
    /// Unknown path or unsupported method.
    pub const ROUTE_NOT_FOUND: &str = "Rota não encontrada.";

    /// Registration succeeded.
    pub const USER_REGISTERED: &str = "Usuário registrado com sucesso.";
    /// Login succeeded and a token was issued.
    pub const LOGIN_SUCCEEDED: &str = "Login realizado com sucesso.";
    /// Contact created.
    pub const CONTACT_CREATED: &str = "Contato criado com sucesso.";
    /// Contact updated.
    pub const CONTACT_UPDATED: &str = "Contato atualizado com sucesso.";
    /// Contact deleted.
    pub const CONTACT_DELETED: &str = "Contato deletado com sucesso.";
}
