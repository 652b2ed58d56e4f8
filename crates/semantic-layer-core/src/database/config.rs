/*
Copyright 2024, Zep Software, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Database configuration types

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::{SemanticLayerError, SemanticLayerResult};

pub const DEFAULT_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_DATABASE: &str = "neo4j";

/// Neo4j connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub pool_size: Option<usize>,
    pub fetch_size: Option<usize>,
}

impl DatabaseConfig {
    /// Create a new Neo4j configuration
    pub fn neo4j(uri: String, username: String, password: String) -> Self {
        Self {
            uri,
            username: Some(username),
            password: Some(password),
            database: Some(DEFAULT_DATABASE.to_string()),
            pool_size: None,
            fetch_size: None,
        }
    }

    /// Load the connection settings from `NEO4J_URI`, `NEO4J_USERNAME`,
    /// `NEO4J_PASSWORD` and the optional `NEO4J_DATABASE`.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> SemanticLayerResult<Self> {
        dotenvy::dotenv().ok();

        let config = Self::neo4j(
            required_var("NEO4J_URI")?,
            required_var("NEO4J_USERNAME")?,
            required_var("NEO4J_PASSWORD")?,
        );

        Ok(match env::var("NEO4J_DATABASE") {
            Ok(database) if !database.is_empty() => config.with_database(database),
            _ => config,
        })
    }

    /// Set the database name
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the connection pool size
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    /// Set how many records are pulled per round trip
    pub fn with_fetch_size(mut self, fetch_size: usize) -> Self {
        self.fetch_size = Some(fetch_size);
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::neo4j(
            DEFAULT_URI.to_string(),
            "neo4j".to_string(),
            "password".to_string(),
        )
    }
}

fn required_var(name: &str) -> SemanticLayerResult<String> {
    env::var(name).map_err(|_| SemanticLayerError::Config {
        message: format!("{} environment variable is required", name),
    })
}
