//! Repository port traits for store access.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sociograph_domain::User;

use super::error::RepoError;

/// The partition of every user except the subject into "following" and
/// "others".
///
/// A strict bipartition: each other user appears in exactly one of the two
/// sequences, and the subject appears in neither. Ordering within each
/// sequence is unspecified.
#[derive(Debug, Clone, Default)]
pub struct FollowingPartition {
    pub following: Vec<User>,
    pub others: Vec<User>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Create a new user from a property bag (full validation).
    ///
    /// Fails with `ValidationError` on invalid fields, including
    /// `UsernameTaken` when the store's uniqueness constraint rejects the
    /// username (concurrently or otherwise).
    async fn create(&self, props: Map<String, Value>) -> Result<User, RepoError>;

    /// Fetch a user by username. Fails with `NotFound` if absent.
    async fn get(&self, username: &str) -> Result<User, RepoError>;

    /// List all users. Order is unspecified and not part of the contract.
    async fn get_all(&self) -> Result<Vec<User>, RepoError>;

    /// Merge-update the sanitized fields onto an existing user (partial
    /// validation) and return the refreshed snapshot.
    ///
    /// Only allowlisted fields are written; properties outside the schema
    /// survive untouched. Fails with `Deleted` if the user vanished before
    /// the write landed.
    async fn patch(&self, user: &User, props: Map<String, Value>) -> Result<User, RepoError>;

    /// Delete a user and every incident follow edge, in one store request.
    /// Deleting an already-gone user succeeds silently.
    async fn delete(&self, user: &User) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepo: Send + Sync {
    /// Ensure a directed follow edge `user -> other` exists. Idempotent:
    /// repeat calls are no-ops, never errors.
    async fn follow(&self, user: &User, other: &User) -> Result<(), RepoError>;

    /// Ensure no directed follow edge `user -> other` exists. Idempotent.
    async fn unfollow(&self, user: &User, other: &User) -> Result<(), RepoError>;

    /// Partition all users except `user` by edge presence, in a single
    /// store query regardless of user count.
    async fn following_and_others(&self, user: &User) -> Result<FollowingPartition, RepoError>;
}
