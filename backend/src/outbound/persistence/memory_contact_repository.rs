//! In-memory contact store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{Contact, ContactDetails, ContactId, UserId};

/// Contacts of every user in creation order, behind one lock.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ContactPersistenceError {
    ContactPersistenceError::unavailable("contact store lock poisoned")
}

fn matches(contact: &Contact, owner: &UserId, id: ContactId) -> bool {
    contact.id() == id && contact.is_owned_by(owner)
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: Contact) -> Result<(), ContactPersistenceError> {
        self.contacts.write().map_err(poisoned)?.push(contact);
        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Contact>, ContactPersistenceError> {
        let contacts = self.contacts.read().map_err(poisoned)?;
        Ok(contacts
            .iter()
            .filter(|contact| contact.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn find_owned(
        &self,
        owner: &UserId,
        id: ContactId,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        let contacts = self.contacts.read().map_err(poisoned)?;
        Ok(contacts
            .iter()
            .find(|contact| matches(contact, owner, id))
            .cloned())
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: ContactId,
        details: ContactDetails,
    ) -> Result<Option<Contact>, ContactPersistenceError> {
        let mut contacts = self.contacts.write().map_err(poisoned)?;
        Ok(contacts
            .iter_mut()
            .find(|contact| matches(contact, owner, id))
            .map(|contact| {
                contact.apply(details);
                contact.clone()
            }))
    }

    async fn delete_owned(
        &self,
        owner: &UserId,
        id: ContactId,
    ) -> Result<bool, ContactPersistenceError> {
        let mut contacts = self.contacts.write().map_err(poisoned)?;
        let before = contacts.len();
        contacts.retain(|contact| !matches(contact, owner, id));
        Ok(contacts.len() != before)
    }
}
