//! Contact domain service.
//!
//! Implements the contact command and query ports over a contact store. All
//! operations are keyed by the authenticated owner; a contact that exists
//! but belongs to somebody else is indistinguishable from a missing one.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    ContactPersistenceError, ContactRepository, ContactsCommand, ContactsQuery,
};
use crate::domain::{
    Contact, ContactId, ContactInput, ContactValidationError, Error, UserId, messages,
};

/// Contact service implementing the contact driving ports.
#[derive(Clone)]
pub struct ContactService<C> {
    contacts: Arc<C>,
}

impl<C> ContactService<C> {
    /// Create a new service backed by `contacts`.
    pub fn new(contacts: Arc<C>) -> Self {
        Self { contacts }
    }
}

impl<C> ContactService<C>
where
    C: ContactRepository,
{
    fn map_persistence_error(error: ContactPersistenceError) -> Error {
        match error {
            ContactPersistenceError::Unavailable { message } => {
                Error::internal(format!("contact repository unavailable: {message}"))
            }
        }
    }

    fn map_validation_error(error: &ContactValidationError) -> Error {
        let field = match error {
            ContactValidationError::EmptyField { field } => *field,
            ContactValidationError::InvalidId => "id",
        };
        Error::invalid_request(messages::REQUIRED_FIELDS).with_details(json!({
            "field": field,
            "code": "empty_field",
        }))
    }

    fn not_found(id: ContactId) -> Error {
        Error::not_found(messages::CONTACT_NOT_FOUND).with_details(json!({
            "id": id.to_string(),
        }))
    }
}

#[async_trait]
impl<C> ContactsCommand for ContactService<C>
where
    C: ContactRepository,
{
    async fn create(&self, owner: &UserId, input: ContactInput) -> Result<Contact, Error> {
        let details = input
            .validate()
            .map_err(|err| Self::map_validation_error(&err))?;
        let contact = Contact::create(owner.clone(), details);
        self.contacts
            .insert(contact.clone())
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %owner, contact_id = %contact.id(), "contact created");
        Ok(contact)
    }

    async fn update(
        &self,
        owner: &UserId,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, Error> {
        // Ownership first: a stranger's id reports not found even with empty fields.
        if self
            .contacts
            .find_owned(owner, id)
            .await
            .map_err(Self::map_persistence_error)?
            .is_none()
        {
            debug!(user_id = %owner, contact_id = %id, "update target not owned");
            return Err(Self::not_found(id));
        }

        let details = input
            .validate()
            .map_err(|err| Self::map_validation_error(&err))?;
        let updated = self
            .contacts
            .update_owned(owner, id, details)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::not_found(id))?;
        info!(user_id = %owner, contact_id = %id, "contact updated");
        Ok(updated)
    }

    async fn delete(&self, owner: &UserId, id: ContactId) -> Result<(), Error> {
        let removed = self
            .contacts
            .delete_owned(owner, id)
            .await
            .map_err(Self::map_persistence_error)?;
        if !removed {
            debug!(user_id = %owner, contact_id = %id, "delete target not owned");
            return Err(Self::not_found(id));
        }
        info!(user_id = %owner, contact_id = %id, "contact deleted");
        Ok(())
    }
}

#[async_trait]
impl<C> ContactsQuery for ContactService<C>
where
    C: ContactRepository,
{
    async fn list(&self, owner: &UserId) -> Result<Vec<Contact>, Error> {
        self.contacts
            .list_by_owner(owner)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
mod tests;
