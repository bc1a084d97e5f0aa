//! Neo4j schema initialization - the username uniqueness constraint.

use neo4rs::{query, Graph};

/// Failure to register the uniqueness constraint.
///
/// Fatal at startup: without the constraint the store cannot arbitrate
/// concurrent creates, so duplicate usernames could land.
#[derive(Debug, thiserror::Error)]
#[error("failed to register username uniqueness constraint: {0}")]
pub struct ConstraintRegistrationError(#[from] neo4rs::Error);

/// Ensure the username uniqueness constraint is registered.
///
/// This should be called once on startup, before serving any traffic.
/// Idempotent: IF NOT EXISTS makes an already-registered constraint a
/// non-error.
pub async fn ensure_schema(graph: &Graph) -> Result<(), ConstraintRegistrationError> {
    graph
        .run(query(
            "CREATE CONSTRAINT user_username_unique IF NOT EXISTS
             FOR (u:User) REQUIRE u.username IS UNIQUE",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (username uniqueness constraint ensured)");
    Ok(())
}
