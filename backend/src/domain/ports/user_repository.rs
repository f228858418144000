//! Driven port for the credential store.

use async_trait::async_trait;

use crate::domain::{User, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Another user already holds the login or email.
        Duplicate {
            /// Wire name of the clashing field.
            field: &'static str,
        } => "user with the same {field} already exists",
        /// The store could not be reached or its lock was poisoned.
        Unavailable {
            /// Detail reported by the adapter.
            message: String,
        } => "user repository unavailable: {message}",
    }
}

/// Ordered collection of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a record unless its login or email is already taken.
    ///
    /// The uniqueness check and the insertion happen atomically.
    async fn insert(&self, record: UserRecord) -> Result<User, UserPersistenceError>;

    /// Fetch the record whose login matches exactly.
    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>, UserPersistenceError>;

    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
