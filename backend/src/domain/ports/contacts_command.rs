//! Driving port for contact mutations.
//!
//! Every operation is scoped to `owner`, the authenticated caller. A contact
//! owned by someone else is reported as not found.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, ContactInput, Error, UserId};

/// Creates, updates and deletes the caller's contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Create a contact owned by `owner`.
    async fn create(&self, owner: &UserId, input: ContactInput) -> Result<Contact, Error>;

    /// Overwrite an owned contact. Ownership is checked before the fields.
    async fn update(
        &self,
        owner: &UserId,
        id: ContactId,
        input: ContactInput,
    ) -> Result<Contact, Error>;

    /// Remove an owned contact.
    async fn delete(&self, owner: &UserId, id: ContactId) -> Result<(), Error>;
}
