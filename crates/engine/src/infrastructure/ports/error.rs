//! Error types for port operations.

use sociograph_domain::ValidationError;

/// Repository operation errors.
///
/// Every operation either succeeds or fails with exactly one of these; no
/// error is swallowed or retried internally. The only silently-handled
/// conditions are the idempotent no-ops (duplicate follow/unfollow, delete
/// of an absent user), which are successes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Input failed schema rules, or the store reported the username
    /// uniqueness constraint violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No user with the requested username.
    #[error("User not found: {username}")]
    NotFound { username: String },

    /// The user existed at read time but was gone when the write landed.
    /// Callers should treat this like `NotFound`.
    #[error("User '{username}' has been deleted")]
    Deleted { username: String },

    /// Transport/protocol-level failure talking to the store, or a
    /// constraint violation that maps to no known schema field. Propagated
    /// unmodified; retrying is the caller's decision.
    #[error("Store error in {operation}: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    pub fn not_found(username: impl ToString) -> Self {
        Self::NotFound {
            username: username.to_string(),
        }
    }

    pub fn deleted(username: impl ToString) -> Self {
        Self::Deleted {
            username: username.to_string(),
        }
    }

    /// Create a Store error with operation context for tracing.
    pub fn store(operation: &'static str, message: impl ToString) -> Self {
        Self::Store {
            operation,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
