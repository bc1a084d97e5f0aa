//! Neo4j deserialization helpers and store-error classification.

use neo4rs::{Node, Row};
use sociograph_domain::{User, Username};

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j Node to simplify common deserialization
/// patterns.
pub trait NodeExt {
    /// Get a required string field with strict error handling.
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;
}

impl NodeExt for Node {
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::store("query", format!("Missing required field '{field}': {e}"))
        })
    }
}

/// Convert a row containing a User node under `alias` into a snapshot.
///
/// Usernames are re-validated on load. A record that no longer satisfies
/// the format rules is store corruption, not caller input, so it maps to a
/// store error rather than a validation failure.
pub fn row_to_user(row: &Row, alias: &str) -> Result<User, RepoError> {
    let node: Node = row.get(alias).map_err(|e| RepoError::store("query", e))?;
    let username = node.get_string_strict("username")?;
    let username = Username::new(username).map_err(|e| RepoError::store("parse", e))?;
    Ok(User::new(username))
}

/// Whether a store error reports a uniqueness-constraint violation.
///
/// The driver surfaces server failures as text; uniqueness violations carry
/// the ConstraintValidationFailed code and an "already exists with" message.
pub fn is_unique_violation(err: &neo4rs::Error) -> bool {
    let message = err.to_string();
    message.contains("ConstraintValidationFailed") || message.contains("already exists with")
}
