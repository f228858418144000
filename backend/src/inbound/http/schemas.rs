//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or the payload is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The login handle or email is already registered.
    #[schema(rename = "duplicate")]
    Duplicate,
    /// Unknown login handle or wrong password.
    #[schema(rename = "invalid_credentials")]
    InvalidCredentials,
    /// Bearer token missing, malformed, forged or expired.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The resource does not exist or belongs to someone else.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and Portuguese
/// client message.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Todos os campos devem ser preenchidos.")]
    mensagem: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`]. Carries no password field.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-generated identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "usuario1")]
    nome: String,
    #[schema(example = "51992413404")]
    telefone: String,
    #[schema(example = "usuario1@gmail.com")]
    email: String,
    /// Unique login handle.
    #[schema(example = "usuario1")]
    login: String,
}

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = Contact, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    /// Server-generated identifier.
    #[schema(example = "9b2f4c1e-8d3a-4f6b-a1c2-3d4e5f6a7b8c")]
    id: String,
    /// Identifier of the owning user.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    usuario_id: String,
    #[schema(example = "Maria")]
    nome: String,
    #[schema(example = "51999990000")]
    telefone: String,
    #[schema(example = "maria@example.com")]
    email: String,
}
