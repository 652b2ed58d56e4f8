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

//! Entry point for callers that want a connected semantic layer

use std::sync::Arc;

use tracing::info;

use crate::{
    database::{create_database, DatabaseConfig, GraphDatabase},
    errors::SemanticLayerResult,
    search::{generate_fulltext_query, Candidate, CandidateFetcher},
    types::EntityType,
};

/// Connected full-text lookup over the movie graph
#[derive(Clone)]
pub struct SemanticLayer {
    driver: Arc<dyn GraphDatabase + Send + Sync>,
    candidates: CandidateFetcher,
}

impl SemanticLayer {
    /// Connect to Neo4j with the given configuration
    pub async fn new(config: DatabaseConfig) -> SemanticLayerResult<Self> {
        info!(uri = %config.uri, database = ?config.database, "connecting to graph database");
        let driver = create_database(config).await?;
        Ok(Self::with_database(driver))
    }

    /// Connect using the `NEO4J_*` environment variables
    pub async fn from_env() -> SemanticLayerResult<Self> {
        Self::new(DatabaseConfig::from_env()?).await
    }

    /// Use an existing database handle
    pub fn with_database(driver: Arc<dyn GraphDatabase + Send + Sync>) -> Self {
        let candidates = CandidateFetcher::new(driver.clone());
        Self { driver, candidates }
    }

    pub fn fulltext_query(&self, input: &str, entity_type: EntityType) -> SemanticLayerResult<String> {
        generate_fulltext_query(input, entity_type)
    }

    pub async fn fetch_candidates(
        &self,
        input: &str,
        entity_type: EntityType,
        limit: Option<usize>,
    ) -> SemanticLayerResult<Vec<Candidate>> {
        self.candidates.fetch_candidates(input, entity_type, limit).await
    }

    pub async fn health_check(&self) -> SemanticLayerResult<bool> {
        Ok(self.driver.health_check().await?)
    }

    pub async fn close(&self) -> SemanticLayerResult<()> {
        Ok(self.driver.close().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::database::{DatabaseError, DatabaseResult, QueryParameter, QueryResult};

    struct UnreachableDatabase;

    #[async_trait]
    impl GraphDatabase for UnreachableDatabase {
        async fn execute(
            &self,
            _query: &str,
            _parameters: HashMap<String, QueryParameter>,
        ) -> DatabaseResult<QueryResult> {
            Err(DatabaseError::Connection("connection refused".to_string()))
        }

        async fn health_check(&self) -> DatabaseResult<bool> {
            Err(DatabaseError::Connection("connection refused".to_string()))
        }

        async fn close(&self) -> DatabaseResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fulltext_query_delegates() {
        let layer = SemanticLayer::with_database(Arc::new(UnreachableDatabase));
        assert_eq!(
            layer.fulltext_query("Tom Hanks", EntityType::Person).unwrap(),
            "name:Tom~0.8 AND name:Hanks~0.8"
        );
    }

    #[tokio::test]
    async fn test_database_failures_propagate() {
        let layer = SemanticLayer::with_database(Arc::new(UnreachableDatabase));

        let err = layer
            .fetch_candidates("Keanu", EntityType::Person, None)
            .await
            .unwrap_err();
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("connection refused"));

        assert!(layer.health_check().await.is_err());
        assert!(layer.close().await.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires a running Neo4j instance with the movie graph and full-text indexes
    async fn test_fetch_candidates_against_live_database() {
        let layer = SemanticLayer::from_env().await.unwrap();
        let candidates = layer
            .fetch_candidates("Tom Hanks", EntityType::Person, None)
            .await
            .unwrap();
        assert!(candidates.len() <= 3);
    }
}
