use serde::{Deserialize, Serialize};
use std::env;

use semantic_layer_core::{DatabaseConfig, DEFAULT_CANDIDATE_LIMIT};

/// Application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Neo4j database URI
    pub neo4j_uri: String,

    /// Neo4j username
    pub neo4j_user: String,

    /// Neo4j password
    pub neo4j_password: String,

    /// Neo4j database name (optional)
    pub neo4j_database: Option<String>,

    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Candidates returned when a request does not ask for a limit
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_candidate_limit() -> usize {
    DEFAULT_CANDIDATE_LIMIT
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("neo4j_uri", &self.neo4j_uri)
            .field("neo4j_user", &self.neo4j_user)
            .field("neo4j_database", &self.neo4j_database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("candidate_limit", &self.candidate_limit)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let candidate_limit = match env::var("CANDIDATE_LIMIT") {
            Ok(value) => parse_candidate_limit(&value)?,
            Err(_) => default_candidate_limit(),
        };

        let port = match env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => default_port(),
        };

        let settings = Settings {
            neo4j_uri: env::var("NEO4J_URI")
                .map_err(|_| anyhow::anyhow!("NEO4J_URI environment variable is required"))?,
            neo4j_user: env::var("NEO4J_USERNAME")
                .map_err(|_| anyhow::anyhow!("NEO4J_USERNAME environment variable is required"))?,
            neo4j_password: env::var("NEO4J_PASSWORD")
                .map_err(|_| anyhow::anyhow!("NEO4J_PASSWORD environment variable is required"))?,
            neo4j_database: env::var("NEO4J_DATABASE").ok().filter(|db| !db.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port,
            candidate_limit,
        };

        Ok(settings)
    }

    /// Get the server address as a string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection settings for the graph database
    pub fn database_config(&self) -> DatabaseConfig {
        let config = DatabaseConfig::neo4j(
            self.neo4j_uri.clone(),
            self.neo4j_user.clone(),
            self.neo4j_password.clone(),
        );
        match &self.neo4j_database {
            Some(database) => config.with_database(database.clone()),
            None => config,
        }
    }
}

fn parse_candidate_limit(value: &str) -> Result<usize, anyhow::Error> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(anyhow::anyhow!(
            "CANDIDATE_LIMIT must be a positive integer, got {:?}",
            value
        )),
    }
}

fn parse_port(value: &str) -> Result<u16, anyhow::Error> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| {
            anyhow::anyhow!(
                "PORT must be a port number between 0 and 65535, got {:?}",
                value
            )
        })
}
