//! Driving port for contact reads.

use async_trait::async_trait;

use crate::domain::{Contact, Error, UserId};

/// Reads the caller's contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Contacts owned by `owner`, in creation order.
    async fn list(&self, owner: &UserId) -> Result<Vec<Contact>, Error>;
}
