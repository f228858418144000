//! In-memory credential store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserRecord};

/// Ordered user records guarded by a single lock.
///
/// The duplicate check and the append share one write guard, so two
/// concurrent registrations for the same login cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::unavailable("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, record: UserRecord) -> Result<User, UserPersistenceError> {
        let mut records = self.records.write().map_err(poisoned)?;
        let candidate = record.user();
        for existing in records.iter().map(UserRecord::user) {
            if existing.login() == candidate.login() {
                return Err(UserPersistenceError::duplicate("login"));
            }
            if existing.email() == candidate.email() {
                return Err(UserPersistenceError::duplicate("email"));
            }
        }
        let user = candidate.clone();
        records.push(record);
        Ok(user)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<UserRecord>, UserPersistenceError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .find(|record| record.user().login() == login)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().map(|record| record.user().clone()).collect())
    }
}
