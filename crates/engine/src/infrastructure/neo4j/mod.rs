//! Neo4j store implementations.

use std::sync::Arc;

use neo4rs::Graph;

use crate::config::StoreConfig;

mod helpers;
mod schema;

mod follow_repo;
mod user_repo;

pub use follow_repo::Neo4jFollowRepo;
pub use schema::{ensure_schema, ConstraintRegistrationError};
pub use user_repo::Neo4jUserRepo;

/// Open a bolt connection to the store.
pub async fn connect(config: &StoreConfig) -> Result<Graph, neo4rs::Error> {
    Graph::new(&config.uri, &config.user, &config.password).await
}

/// All Neo4j repositories built from one graph connection.
pub struct Neo4jRepositories {
    pub users: Arc<Neo4jUserRepo>,
    pub follows: Arc<Neo4jFollowRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            users: Arc::new(Neo4jUserRepo::new(graph.clone())),
            follows: Arc::new(Neo4jFollowRepo::new(graph)),
        }
    }
}
