//! Neo4j user repository implementation.

use async_trait::async_trait;
use neo4rs::{query, Graph, Query};
use serde_json::{Map, Value};
use sociograph_domain::{validate, Mode, User, ValidationError, USER_SCHEMA};

use super::helpers::{is_unique_violation, row_to_user};
use crate::infrastructure::ports::{RepoError, UserRepo};

pub struct Neo4jUserRepo {
    graph: Graph,
}

impl Neo4jUserRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

/// `{username: $username, ...}` literal for CREATE, one entry per sanitized
/// field. Keys come from the schema allowlist, never from the caller, so
/// splicing them into Cypher is safe.
fn create_pattern(props: &Map<String, Value>) -> String {
    props
        .keys()
        .map(|k| format!("{k}: ${k}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `user.username = $username, ...` assignments for SET. Writing fields one
/// by one is the merge-update: properties outside the schema are never
/// touched, where a whole-record replace would clobber them.
fn patch_assignments(props: &Map<String, Value>) -> String {
    props
        .keys()
        .map(|k| format!("user.{k} = ${k}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bind every sanitized property as a query parameter. Validation
/// guarantees the values are strings.
fn bind_props(mut q: Query, props: &Map<String, Value>) -> Query {
    for (key, value) in props {
        if let Value::String(s) = value {
            q = q.param(key, s.clone());
        }
    }
    q
}

fn attempted_username(props: &Map<String, Value>) -> String {
    props
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Map a write failure to `UsernameTaken` when the store reports the
/// uniqueness constraint; everything else passes through as a store error.
fn map_write_error(err: neo4rs::Error, operation: &'static str, username: String) -> RepoError {
    if is_unique_violation(&err) {
        ValidationError::username_taken(username).into()
    } else {
        RepoError::store(operation, err)
    }
}

#[async_trait]
impl UserRepo for Neo4jUserRepo {
    async fn create(&self, props: Map<String, Value>) -> Result<User, RepoError> {
        let safe = validate(&props, &USER_SCHEMA, Mode::Full)?;

        let cypher = format!("CREATE (user:User {{{}}}) RETURN user", create_pattern(&safe));
        let q = bind_props(query(&cypher), &safe);

        // The constraint violation can surface either when the query is
        // issued or when the first row is pulled, so both paths map it.
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| map_write_error(e, "create-user", attempted_username(&safe)))?;

        match result.next().await {
            Ok(Some(row)) => {
                let user = row_to_user(&row, "user")?;
                tracing::debug!(username = %user.username(), "Created user");
                Ok(user)
            }
            Ok(None) => Err(RepoError::store("create-user", "no record returned")),
            Err(e) => Err(map_write_error(e, "create-user", attempted_username(&safe))),
        }
    }

    async fn get(&self, username: &str) -> Result<User, RepoError> {
        let q = query("MATCH (user:User {username: $username}) RETURN user")
            .param("username", username.to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::store("get-user", e))?;

        match result
            .next()
            .await
            .map_err(|e| RepoError::store("get-user", e))?
        {
            Some(row) => row_to_user(&row, "user"),
            None => Err(RepoError::not_found(username)),
        }
    }

    async fn get_all(&self) -> Result<Vec<User>, RepoError> {
        let q = query("MATCH (user:User) RETURN user");

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::store("get-all-users", e))?;

        let mut users = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::store("get-all-users", e))?
        {
            users.push(row_to_user(&row, "user")?);
        }

        Ok(users)
    }

    async fn patch(&self, user: &User, props: Map<String, Value>) -> Result<User, RepoError> {
        let safe = validate(&props, &USER_SCHEMA, Mode::Partial)?;

        let assignments = patch_assignments(&safe);
        let cypher = if assignments.is_empty() {
            "MATCH (user:User {username: $current}) RETURN user".to_string()
        } else {
            format!("MATCH (user:User {{username: $current}}) SET {assignments} RETURN user")
        };
        let q = bind_props(query(&cypher), &safe)
            .param("current", user.username().as_str().to_string());

        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| map_write_error(e, "patch-user", attempted_username(&safe)))?;

        match result.next().await {
            Ok(Some(row)) => row_to_user(&row, "user"),
            // Zero rows means the node vanished between read and write: a
            // legitimate race against a concurrent delete.
            Ok(None) => Err(RepoError::deleted(user.username())),
            Err(e) => Err(map_write_error(e, "patch-user", attempted_username(&safe))),
        }
    }

    /// Delete the user and all incident follow edges.
    /// A single DETACH DELETE statement, so no partial delete (edges gone,
    /// entity present, or vice versa) is ever observable.
    async fn delete(&self, user: &User) -> Result<(), RepoError> {
        let q = query("MATCH (user:User {username: $username}) DETACH DELETE user")
            .param("username", user.username().as_str().to_string());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::store("delete-user", e))?;

        tracing::debug!(username = %user.username(), "Deleted user");
        Ok(())
    }
}
