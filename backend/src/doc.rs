//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every user and contact endpoint of the inbound layer
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`UserSchema`], [`ContactSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//! - **Security**: HS256 JWT bearer authentication scheme
//!
//! The generated document is served by Swagger UI under `/api-docs/`
//! and exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::contacts::{ContactRequest, ContactResponse, MessageResponse};
use crate::inbound::http::schemas::{ContactSchema, ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Name of the bearer security scheme referenced by protected operations.
pub const BEARER_SCHEME: &str = "bearerAuth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /usuarios/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Agenda backend API",
        description = "Contacts agenda with user registration and bearer-token authentication.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::list_users,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
    ),
    components(schemas(
        UserSchema,
        ContactSchema,
        ErrorSchema,
        ErrorCodeSchema,
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        ContactRequest,
        ContactResponse,
        MessageResponse,
    )),
    tags(
        (name = "usuarios", description = "Registration, login and user listing"),
        (name = "contatos", description = "Per-user contacts; bearer token required")
    )
)]
pub struct ApiDoc;
