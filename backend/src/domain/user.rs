//! User data model.
//!
//! [`User`] is the public projection and carries no credential material at
//! all. The stored password hash only exists on [`UserRecord`], which never
//! leaves the domain and persistence layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// A required registration field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the offending field.
        field: &'static str,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Public view of a registered user.
///
/// Serialised with the wire names `id`, `nome`, `telefone`, `email` and
/// `login`. There is deliberately no password field to skip or null out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "telefone")]
    phone: String,
    email: String,
    login: String,
}

impl User {
    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone number as supplied at registration.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Email address; unique across users.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Login handle; unique across users.
    pub fn login(&self) -> &str {
        &self.login
    }
}

/// Validated registration request.
///
/// ## Invariants
/// - every field is non-empty once trimmed;
/// - `login` and `email` are kept verbatim so uniqueness is an exact,
///   case-sensitive comparison.
///
/// # Examples
/// ```
/// use agenda_backend::domain::UserRegistration;
///
/// let reg = UserRegistration::try_from_parts(
///     "Ada", "5551999", "ada@example.com", "ada", "s3cret",
/// )
/// .unwrap();
/// assert_eq!(reg.login(), "ada");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserRegistration {
    name: String,
    phone: String,
    email: String,
    login: String,
    password: Zeroizing<String>,
}

impl UserRegistration {
    /// Build a registration from raw field values, rejecting empty ones.
    pub fn try_from_parts(
        name: &str,
        phone: &str,
        email: &str,
        login: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        for (field, value) in [
            ("nome", name),
            ("telefone", phone),
            ("email", email),
            ("login", login),
            ("senha", password),
        ] {
            if value.is_empty() {
                return Err(UserValidationError::EmptyField { field });
            }
        }

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            login: login.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Login handle requested by the caller.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Email requested by the caller.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plain-text password to hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Turn the registration into a stored record under a fresh identifier.
    pub fn into_record(self, password_hash: PasswordHash) -> UserRecord {
        let Self {
            name,
            phone,
            email,
            login,
            ..
        } = self;
        UserRecord {
            user: User {
                id: UserId::random(),
                name,
                phone,
                email,
                login,
            },
            password_hash,
        }
    }
}

impl fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Encoded password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a password hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded PHC string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Stored credential record: the public user plus its password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    user: User,
    password_hash: PasswordHash,
}

impl UserRecord {
    /// Public projection of the record.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Consume the record, dropping the hash.
    pub fn into_user(self) -> User {
        self.user
    }
}
