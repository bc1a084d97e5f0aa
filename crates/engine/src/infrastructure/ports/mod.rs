//! Port traits for infrastructure boundaries.
//!
//! The repositories are the only abstractions in this crate. They exist so
//! the store could be swapped and so callers (the routing layer, tests) can
//! substitute mocks.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{FollowRepo, FollowingPartition, UserRepo};

#[cfg(test)]
pub use repos::{MockFollowRepo, MockUserRepo};
