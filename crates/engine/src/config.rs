//! Store connection configuration.

/// Connection settings for the Neo4j store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl StoreConfig {
    /// Load configuration from the environment, with local-dev defaults.
    ///
    /// Reads `.env` first so local overrides apply.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".into()),
            user: std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into()),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "password".into()),
        }
    }
}
