//! Users API handlers.
//!
//! ```text
//! POST /usuarios/registro {"nome":"Ada","telefone":"5551","email":"ada@x.io","login":"ada","senha":"s3cret"}
//! POST /usuarios/login {"login":"ada","senha":"s3cret"}
//! GET /usuarios
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::messages::{LOGIN_REQUIRED, LOGIN_SUCCEEDED, REQUIRED_FIELDS, USER_REGISTERED};
use crate::domain::{
    Error, LoginCredentials, LoginValidationError, User, UserRegistration, UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::text_field;

/// Registration body for `POST /usuarios/registro`.
///
/// Absent or `null` fields deserialise as empty strings so they fail the
/// presence check with the same message as empty ones. Numbers are accepted
/// in place of strings and kept as written.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "usuario1")]
    pub nome: String,
    /// Phone number; a JSON number is accepted.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "51992413404")]
    pub telefone: String,
    /// Email address, unique across users.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "usuario1@gmail.com")]
    pub email: String,
    /// Login handle, unique across users.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "usuario1")]
    pub login: String,
    /// Plaintext password; only its hash is stored.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "senha123")]
    pub senha: String,
}

impl TryFrom<RegisterRequest> for UserRegistration {
    type Error = UserValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            &value.nome,
            &value.telefone,
            &value.email,
            &value.login,
            &value.senha,
        )
    }
}

/// Login body for `POST /usuarios/login`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    /// Login handle.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "usuario1")]
    pub login: String,
    /// Plaintext password.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "senha123")]
    pub senha: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.login, &value.senha)
    }
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    /// Confirmation message.
    #[schema(example = "Usuário registrado com sucesso.")]
    pub mensagem: String,
    /// The stored user without credentials.
    #[schema(value_type = UserSchema)]
    pub usuario: User,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Confirmation message.
    #[schema(example = "Login realizado com sucesso.")]
    pub mensagem: String,
    /// HS256 bearer token for the `Authorization` header.
    pub token: String,
}

fn map_registration_validation_error(err: UserValidationError) -> Error {
    let error = Error::invalid_request(REQUIRED_FIELDS);
    match err {
        UserValidationError::EmptyField { field } => {
            error.with_details(json!({ "field": field, "code": "empty_field" }))
        }
        UserValidationError::EmptyId | UserValidationError::InvalidId => error,
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyLogin => "login",
        LoginValidationError::EmptyPassword => "senha",
    };
    Error::invalid_request(LOGIN_REQUIRED)
        .with_details(json!({ "field": field, "code": "empty_field" }))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/usuarios/registro",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Blank field or login/email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "registerUser",
    security([])
)]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = UserRegistration::try_from(payload.into_inner())
        .map_err(map_registration_validation_error)?;
    let user = state.registration.register(registration).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        mensagem: USER_REGISTERED.to_owned(),
        usuario: user,
    }))
}

/// Exchange login and password for a bearer token.
///
/// Unknown logins and wrong passwords share one `401` response.
#[utoipa::path(
    post,
    path = "/usuarios/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Login or password missing", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "login",
    security([])
)]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let token = state.login.authenticate(&credentials).await?;
    debug!(expires_at = %token.expires_at(), "issued access token");
    Ok(HttpResponse::Ok().json(LoginResponse {
        mensagem: LOGIN_SUCCEEDED.to_owned(),
        token: token.into_string(),
    }))
}

/// List every registered user without credentials.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use agenda_backend::inbound::http::users::list_users;
///
/// let app = App::new().route("/usuarios", web::get().to(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Users in registration order", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["usuarios"],
    operation_id = "listUsers",
    security([])
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}
