//! Contact aggregate owned by exactly one user.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Validation errors raised while building contact values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// Identifier was not a canonical UUID.
    #[error("contact id must be a valid UUID")]
    InvalidId,
    /// A required field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the offending field.
        field: &'static str,
    },
}

/// Stable contact identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Parse a path segment into an identifier.
    pub fn new(raw: &str) -> Result<Self, ContactValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw contact fields as received from a caller, not yet validated.
///
/// Kept separate from [`ContactDetails`] so an update can report a missing
/// contact before it reports empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl ContactInput {
    /// Validate presence of every field.
    pub fn validate(self) -> Result<ContactDetails, ContactValidationError> {
        for (field, value) in [
            ("nome", &self.name),
            ("telefone", &self.phone),
            ("email", &self.email),
        ] {
            if value.is_empty() {
                return Err(ContactValidationError::EmptyField { field });
            }
        }
        let Self { name, phone, email } = self;
        Ok(ContactDetails { name, phone, email })
    }
}

/// Validated contact fields; all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    phone: String,
    email: String,
}

/// Contact record as stored and returned to its owner.
///
/// Serialised as `{"id", "usuarioId", "nome", "telefone", "email"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    #[serde(rename = "usuarioId")]
    owner: UserId,
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "telefone")]
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact with a fresh identifier.
    pub fn create(owner: UserId, details: ContactDetails) -> Self {
        let ContactDetails { name, phone, email } = details;
        Self {
            id: ContactId::random(),
            owner,
            name,
            phone,
            email,
        }
    }

    /// Overwrite name, phone and email; identity and owner are untouched.
    pub fn apply(&mut self, details: ContactDetails) {
        let ContactDetails { name, phone, email } = details;
        self.name = name;
        self.phone = phone;
        self.email = email;
    }

    /// Contact identifier.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Owning user.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// True when `user` owns this contact.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone number, verbatim.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Email address, verbatim.
    pub fn email(&self) -> &str {
        &self.email
    }
}
