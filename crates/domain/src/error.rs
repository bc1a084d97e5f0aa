//! Unified error type for domain validation.

use thiserror::Error;

/// A recoverable input failure: the caller can re-prompt and retry.
///
/// Uniqueness violations reported by the store surface here too, so the
/// caller sees one taxonomy for "your input was rejected" regardless of
/// whether a schema rule or the store constraint caught it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent (full-mode validation only).
    #[error("Missing {field} (required).")]
    Missing { field: &'static str },

    /// A present value failed a schema rule.
    #[error("Invalid {field} ({problem}). Requirements: {requirement}")]
    Invalid {
        field: &'static str,
        problem: &'static str,
        requirement: &'static str,
    },

    /// The store's uniqueness constraint rejected the username.
    #[error("The username '{username}' is taken.")]
    UsernameTaken { username: String },
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    pub fn invalid(field: &'static str, problem: &'static str, requirement: &'static str) -> Self {
        Self::Invalid {
            field,
            problem,
            requirement,
        }
    }

    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
        }
    }
}
