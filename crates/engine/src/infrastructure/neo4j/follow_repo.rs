//! Neo4j follow-graph implementation.
//!
//! Edges are keyed by username, the uniqueness-constrained property, never
//! by store-internal ids (which are not stable across store
//! implementations).

use async_trait::async_trait;
use neo4rs::{query, Graph};
use sociograph_domain::User;

use super::helpers::row_to_user;
use crate::infrastructure::ports::{FollowRepo, FollowingPartition, RepoError};

pub struct Neo4jFollowRepo {
    graph: Graph,
}

impl Neo4jFollowRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl FollowRepo for Neo4jFollowRepo {
    /// Ensure the edge exists (MERGE makes repeat calls no-ops).
    async fn follow(&self, user: &User, other: &User) -> Result<(), RepoError> {
        let q = query(
            "MATCH (user:User {username: $username})
            MATCH (other:User {username: $other})
            MERGE (user)-[:FOLLOWS]->(other)",
        )
        .param("username", user.username().as_str().to_string())
        .param("other", other.username().as_str().to_string());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::store("create-edge", e))?;

        Ok(())
    }

    /// Remove the edge if present (deleting nothing is a no-op).
    async fn unfollow(&self, user: &User, other: &User) -> Result<(), RepoError> {
        let q = query(
            "MATCH (:User {username: $username})-[rel:FOLLOWS]->(:User {username: $other})
            DELETE rel",
        )
        .param("username", user.username().as_str().to_string())
        .param("other", other.username().as_str().to_string());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::store("delete-edge", e))?;

        Ok(())
    }

    /// One round trip: every other user, with the presence of a follow edge
    /// from the subject. `other <> user` keeps the subject (and any
    /// self-follow edge) out of both halves.
    async fn following_and_others(&self, user: &User) -> Result<FollowingPartition, RepoError> {
        let q = query(
            "MATCH (user:User {username: $username})
            MATCH (other:User)
            WHERE other <> user
            OPTIONAL MATCH (user)-[rel:FOLLOWS]->(other)
            RETURN other, count(rel) AS follows",
        )
        .param("username", user.username().as_str().to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::store("get-following", e))?;

        let mut partition = FollowingPartition::default();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::store("get-following", e))?
        {
            let other = row_to_user(&row, "other")?;
            let follows: i64 = row
                .get("follows")
                .map_err(|e| RepoError::store("get-following", e))?;

            if follows > 0 {
                partition.following.push(other);
            } else {
                partition.others.push(other);
            }
        }

        Ok(partition)
    }
}
