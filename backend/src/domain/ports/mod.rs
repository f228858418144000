//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Service`, `*Query`, `*Command`) are what inbound adapters
//! call. Driven ports (repositories, the password hasher and the token codec)
//! are what domain services call; each exposes a typed error so adapters map
//! their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod access_tokens;
mod contact_repository;
mod contacts_command;
mod contacts_query;
mod login_service;
mod password_hasher;
mod registration_service;
mod user_repository;
mod users_query;

pub use access_tokens::{AccessTokenError, AccessTokenIssuer, AccessTokenVerifier};
#[cfg(test)]
pub use access_tokens::{MockAccessTokenIssuer, MockAccessTokenVerifier};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactPersistenceError, ContactRepository};
pub use contacts_command::ContactsCommand;
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_query::ContactsQuery;
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
