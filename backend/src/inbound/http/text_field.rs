//! Lenient decoding for free-text request fields.
//!
//! Clients commonly send phone numbers as JSON numbers. Request bodies accept
//! a string or a number for every text field and keep the number's decimal
//! rendering; `null` decodes as an empty string and fails the presence check
//! like an absent field.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

/// Decode a string, a number or `null` into a `String`.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TextOrNumber>::deserialize(deserializer)
        .map(|value| value.map(String::from).unwrap_or_default())
}
