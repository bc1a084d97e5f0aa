//! The user entity and its field rules.

use std::fmt;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{FieldSchema, FieldSpec};

/// Rules for the `username` field. The store additionally enforces
/// uniqueness across all users.
static USERNAME_RULES: Lazy<FieldSpec> = Lazy::new(|| FieldSpec {
    required: true,
    min_length: Some(2),
    max_length: Some(16),
    pattern: Some(Regex::new("^[A-Za-z0-9_]+$").expect("username pattern compiles")),
    requirement: "2-16 characters; letters, numbers, and underscores only.",
});

/// The recognized fields of a user record. Repository writes sanitize
/// property bags through this schema, so unrecognized fields never reach
/// the store.
pub static USER_SCHEMA: Lazy<FieldSchema> =
    Lazy::new(|| FieldSchema::new(vec![("username", USERNAME_RULES.clone())]));

/// A validated username (2-16 chars, letters/numbers/underscores).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new validated username.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Invalid` if the name violates the username
    /// field rules. Goes through the same [`FieldSpec`] as bag validation,
    /// so the two cannot drift apart.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        USERNAME_RULES.check("username", &name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> String {
        username.0
    }
}

/// An immutable snapshot of a stored user record.
///
/// Fields are private and exposed through read-only accessors; the snapshot
/// cannot drift from the store because the only way to mutate a user is a
/// repository operation, which returns a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    username: Username,
}

impl User {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}
