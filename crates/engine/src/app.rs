//! Application composition.

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::infrastructure::neo4j::{self, ConstraintRegistrationError, Neo4jRepositories};
use crate::infrastructure::ports::{FollowRepo, UserRepo};

/// Startup failures. Both variants are fatal: the process must not serve
/// traffic without a store connection and the uniqueness constraint in
/// place.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to store: {0}")]
    Connect(#[from] neo4rs::Error),

    #[error(transparent)]
    Constraint(#[from] ConstraintRegistrationError),
}

/// The composed application core: repositories over one store connection.
///
/// The (external) routing layer consumes these handles; nothing here serves
/// traffic itself.
pub struct App {
    pub users: Arc<dyn UserRepo>,
    pub follows: Arc<dyn FollowRepo>,
}

impl App {
    pub fn new(users: Arc<dyn UserRepo>, follows: Arc<dyn FollowRepo>) -> Self {
        Self { users, follows }
    }

    /// Connect to the store, register the uniqueness constraint, and build
    /// the repositories.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StartupError> {
        tracing::info!(uri = %config.uri, "Connecting to Neo4j");
        let graph = neo4j::connect(config).await?;

        neo4j::ensure_schema(&graph).await?;

        let repos = Neo4jRepositories::new(graph);
        Ok(Self::new(repos.users, repos.follows))
    }
}
