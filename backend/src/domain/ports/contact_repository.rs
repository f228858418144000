//! Driven port for the contact store.
//!
//! Every lookup and mutation takes the owner alongside the contact id, so an
//! adapter cannot hand one user's contact to another by accident.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDetails, ContactId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactPersistenceError {
        /// The store could not be reached or its lock was poisoned.
        Unavailable {
            /// Detail reported by the adapter.
            message: String,
        } => "contact repository unavailable: {message}",
    }
}

/// Ordered collection of contacts tagged with their owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Append a new contact.
    async fn insert(&self, contact: Contact) -> Result<(), ContactPersistenceError>;

    /// Contacts owned by `owner`, in store order.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Contact>, ContactPersistenceError>;

    /// Fetch a contact only if `owner` owns it.
    async fn find_owned(
        &self,
        owner: &UserId,
        id: ContactId,
    ) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Overwrite the fields of an owned contact; `None` when no match.
    async fn update_owned(
        &self,
        owner: &UserId,
        id: ContactId,
        details: ContactDetails,
    ) -> Result<Option<Contact>, ContactPersistenceError>;

    /// Remove an owned contact; `false` when no match.
    async fn delete_owned(
        &self,
        owner: &UserId,
        id: ContactId,
    ) -> Result<bool, ContactPersistenceError>;
}
