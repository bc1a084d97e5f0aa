//! End-to-end tests against a real Neo4j via testcontainers.
//!
//! These are model-level CRUD tests, ordered within each test to cover all
//! cases: listing users, the uniqueness constraint, renames, deletion
//! cascades, and following/unfollowing between users.

mod neo4j_test_harness;


use std::sync::Arc;

use crate::infrastructure::neo4j::{ensure_schema, Neo4jRepositories};
use crate::infrastructure::ports::{FollowRepo, UserRepo};

use self::neo4j_test_harness::Neo4jTestHarness;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sociograph_engine=debug".into()),
        )
        .try_init();
}

/// Start a container, register the schema, and hand back the repositories.
async fn start_repos() -> anyhow::Result<(
    Neo4jTestHarness,
    Arc<dyn UserRepo>,
    Arc<dyn FollowRepo>,
)> {
    init_tracing();

    let harness = Neo4jTestHarness::start()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    ensure_schema(&harness.graph_clone()).await?;

    let repos = Neo4jRepositories::new(harness.graph_clone());
    Ok((harness, repos.users, repos.follows))
}
