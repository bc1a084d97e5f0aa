//! Neo4j test harness for e2e testing.
//!
//! Provides testcontainer-based Neo4j instance management for integration
//! tests.

use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Start a new Neo4j container and establish a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or a connection
    /// cannot be established.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> =
            neo4j_image(TEST_NEO4J_PASSWORD).start().await;
        let bolt_port = container.get_host_port_ipv4(7687).await;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD).await?;

        Ok(Self {
            _container: container,
            graph,
        })
    }

    /// Clone the graph connection for use in other components.
    pub fn graph_clone(&self) -> Graph {
        self.graph.clone()
    }
}

/// Create a Neo4j container image with the given password.
///
/// Memory limits keep the JVM stable under test workloads; readiness is
/// verified by `connect_with_retry` rather than stdout parsing.
fn neo4j_image(password: &str) -> GenericImage {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var(
            "NEO4J_dbms_connector_bolt_advertised__address",
            "localhost:7687",
        )
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(7687)
        .with_wait_for(WaitFor::seconds(5))
}

/// Connect to Neo4j with retry and exponential backoff, verifying the
/// connection with an actual query.
async fn connect_with_retry(
    uri: &str,
    user: &str,
    password: &str,
) -> Result<Graph, Box<dyn std::error::Error + Send + Sync>> {
    let mut delay = Duration::from_millis(500);

    for attempt in 1..=30u32 {
        match Graph::new(uri, user, password).await {
            Ok(graph) => {
                if graph.run(query("RETURN 1")).await.is_ok() {
                    return Ok(graph);
                }
            }
            Err(e) => {
                tracing::debug!(attempt, error = %e, "Neo4j not ready yet");
            }
        }

        sleep(delay).await;
        delay = (delay * 2).min(Duration::from_secs(5));
    }

    Err("Neo4j container did not become ready".into())
}
