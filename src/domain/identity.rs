//! Customer identity value objects
//!
//! Personal identification numbers and customer names, validated at
//! construction so a registered customer always carries well-formed identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a customer name, in characters
const MAX_NAME_LEN: usize = 100;

/// Errors raised while validating customer identity fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Personal id must not be empty")]
    EmptyPersonalId,

    #[error("Invalid personal id: {0}")]
    InvalidPersonalId(String),

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name exceeds {MAX_NAME_LEN} characters")]
    NameTooLong,

    #[error("Name contains control characters")]
    InvalidName,
}

/// Personal identification number (personnummer).
///
/// Digit groups joined by single separators (`-`, `+` or a space). The
/// length of each group is not checked. The text is kept as given (trimmed)
/// so it can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalId(String);

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '+' | ' ')
}

impl PersonalId {
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyPersonalId);
        }

        let well_formed = text.split(is_separator).all(|group| {
            !group.is_empty() && group.chars().all(|c| c.is_ascii_digit())
        });
        if !well_formed {
            return Err(ValidationError::InvalidPersonalId(text.to_string()));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PersonalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PersonalId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonalId> for String {
    fn from(id: PersonalId) -> Self {
        id.0
    }
}

/// Customer display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if text.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
        if text.chars().any(char::is_control) {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
