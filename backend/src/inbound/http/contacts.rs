//! Contacts API handlers.
//!
//! Every route here sits behind [`crate::middleware::BearerAuth`]; handlers
//! only ever act on contacts owned by the [`AuthenticatedUser`].
//!
//! ```text
//! POST /contatos {"nome":"Maria","telefone":"5551","email":"maria@x.io"}
//! GET /contatos
//! PUT /contatos/{id} {"nome":"Maria","telefone":"5552","email":"maria@x.io"}
//! DELETE /contatos/{id}
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::messages::{
    CONTACT_CREATED, CONTACT_DELETED, CONTACT_NOT_FOUND, CONTACT_UPDATED,
};
use crate::domain::{Contact, ContactId, ContactInput, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::{ContactSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::text_field;

/// Body for creating or replacing a contact.
///
/// Absent or `null` fields deserialise as empty strings and fail the
/// presence check. Numbers are accepted in place of strings.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    /// Contact name.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "Maria")]
    pub nome: String,
    /// Phone number; a JSON number is accepted.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "51999990000")]
    pub telefone: String,
    /// Email address.
    #[serde(deserialize_with = "text_field::deserialize")]
    #[schema(example = "maria@example.com")]
    pub email: String,
}

impl From<ContactRequest> for ContactInput {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: value.nome,
            phone: value.telefone,
            email: value.email,
        }
    }
}

/// Response body for create and update.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContactResponse {
    /// Confirmation message.
    #[schema(example = "Contato criado com sucesso.")]
    pub mensagem: String,
    /// The contact as stored.
    #[schema(value_type = ContactSchema)]
    pub contato: Contact,
}

/// Response body carrying only a confirmation message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    /// Confirmation message.
    #[schema(example = "Contato deletado com sucesso.")]
    pub mensagem: String,
}

/// Path ids that are not UUIDs cannot name any contact.
fn parse_contact_id(raw: &str) -> ApiResult<ContactId> {
    ContactId::new(raw)
        .map_err(|_| Error::not_found(CONTACT_NOT_FOUND).with_details(json!({ "id": raw })))
}

/// Create a contact owned by the caller.
#[utoipa::path(
    post,
    path = "/contatos",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Blank field", body = ErrorSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contatos"],
    operation_id = "createContact",
    security(("bearerAuth" = []))
)]
pub async fn create_contact(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contacts
        .create(user.id(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ContactResponse {
        mensagem: CONTACT_CREATED.to_owned(),
        contato: contact,
    }))
}

/// List the caller's contacts in creation order.
#[utoipa::path(
    get,
    path = "/contatos",
    responses(
        (status = 200, description = "Caller's contacts", body = [ContactSchema]),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contatos"],
    operation_id = "listContacts",
    security(("bearerAuth" = []))
)]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Contact>>> {
    let contacts = state.contacts_query.list(user.id()).await?;
    Ok(web::Json(contacts))
}

/// Overwrite name, phone and email of one of the caller's contacts.
///
/// A contact that does not exist and one owned by someone else are
/// indistinguishable: both yield `404`.
#[utoipa::path(
    put,
    path = "/contatos/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Blank field", body = ErrorSchema),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 404, description = "No such contact for this user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contatos"],
    operation_id = "updateContact",
    security(("bearerAuth" = []))
)]
pub async fn update_contact(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    let contact = state
        .contacts
        .update(user.id(), id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ContactResponse {
        mensagem: CONTACT_UPDATED.to_owned(),
        contato: contact,
    }))
}

/// Delete one of the caller's contacts.
#[utoipa::path(
    delete,
    path = "/contatos/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorSchema),
        (status = 404, description = "No such contact for this user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contatos"],
    operation_id = "deleteContact",
    security(("bearerAuth" = []))
)]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_contact_id(&path)?;
    state.contacts.delete(user.id(), id).await?;
    Ok(web::Json(MessageResponse {
        mensagem: CONTACT_DELETED.to_owned(),
    }))
}
