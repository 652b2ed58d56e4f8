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

//! Neo4j database implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{BoltList, BoltMap, BoltType, ConfigBuilder, Graph};
use tracing::{debug, instrument};

use super::config::DatabaseConfig;
use super::traits::{GraphDatabase, QueryParameter, QueryResult};
use super::types::{DatabaseError, DatabaseResult};

/// Neo4j database implementation
pub struct Neo4jDatabase {
    graph: Arc<Graph>,
}

impl std::fmt::Debug for Neo4jDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jDatabase").finish_non_exhaustive()
    }
}

impl Neo4jDatabase {
    /// Create a new Neo4j database connection
    pub async fn new(config: DatabaseConfig) -> DatabaseResult<Self> {
        let mut builder = ConfigBuilder::default().uri(&config.uri);

        if let Some(username) = &config.username {
            builder = builder.user(username.as_str());
        }

        if let Some(password) = &config.password {
            builder = builder.password(password.as_str());
        }

        if let Some(database) = &config.database {
            builder = builder.db(database.as_str());
        }

        if let Some(pool_size) = config.pool_size {
            builder = builder.max_connections(pool_size);
        }

        if let Some(fetch_size) = config.fetch_size {
            builder = builder.fetch_size(fetch_size);
        }

        let graph = Graph::connect(builder.build()?)
            .await
            .map_err(|e| DatabaseError::Connection(format!("{}: {}", config.uri, e)))?;

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Convert QueryParameter to BoltType for Neo4j
    fn param_to_bolt(param: &QueryParameter) -> DatabaseResult<BoltType> {
        match param {
            QueryParameter::String(s) => Ok(BoltType::String(neo4rs::BoltString::new(s))),
            QueryParameter::Integer(i) => Ok(BoltType::Integer(neo4rs::BoltInteger::new(*i))),
            QueryParameter::Float(f) => {
                if f.is_finite() {
                    Ok(BoltType::Float(neo4rs::BoltFloat::new(*f)))
                } else {
                    Err(DatabaseError::InvalidParameter(format!(
                        "non-finite float {}",
                        f
                    )))
                }
            }
            QueryParameter::Boolean(b) => Ok(BoltType::Boolean(neo4rs::BoltBoolean::new(*b))),
            QueryParameter::Null => Ok(BoltType::Null(neo4rs::BoltNull)),
            QueryParameter::List(list) => {
                let mut bolt_list = BoltList::new();
                for item in list {
                    bolt_list.push(Self::param_to_bolt(item)?);
                }
                Ok(BoltType::List(bolt_list))
            }
            QueryParameter::Map(map) => {
                let mut bolt_map = BoltMap::new();
                for (key, value) in map {
                    bolt_map.put(neo4rs::BoltString::new(key), Self::param_to_bolt(value)?);
                }
                Ok(BoltType::Map(bolt_map))
            }
        }
    }

    /// Convert BoltType to QueryParameter
    fn bolt_to_param(bolt: &BoltType) -> QueryParameter {
        match bolt {
            BoltType::String(s) => QueryParameter::String(s.value.clone()),
            BoltType::Integer(i) => QueryParameter::Integer(i.value),
            BoltType::Float(f) => QueryParameter::Float(f.value),
            BoltType::Boolean(b) => QueryParameter::Boolean(b.value),
            BoltType::Null(_) => QueryParameter::Null,
            BoltType::List(list) => {
                QueryParameter::List(list.value.iter().map(Self::bolt_to_param).collect())
            }
            BoltType::Map(map) => QueryParameter::Map(
                map.value
                    .iter()
                    .map(|(key, value)| (key.value.clone(), Self::bolt_to_param(value)))
                    .collect(),
            ),
            // Nodes, relations, paths and temporal values are not read back by this layer
            other => QueryParameter::String(format!("{:?}", other)),
        }
    }
}

#[async_trait]
impl GraphDatabase for Neo4jDatabase {
    #[instrument(skip(self, parameters))]
    async fn execute(
        &self,
        query: &str,
        parameters: HashMap<String, QueryParameter>,
    ) -> DatabaseResult<QueryResult> {
        let mut cypher = neo4rs::query(query);
        for (key, value) in &parameters {
            cypher = cypher.param(key, Self::param_to_bolt(value)?);
        }

        let mut stream = self
            .graph
            .execute(cypher)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            let fields: HashMap<String, BoltType> = row
                .to()
                .map_err(|e| DatabaseError::Serialization(e.to_string()))?;
            rows.push(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), Self::bolt_to_param(value)))
                    .collect(),
            );
        }

        debug!(rows = rows.len(), "query returned");
        Ok(QueryResult::from_rows(rows))
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        let result = self.execute("RETURN 1 AS health", HashMap::new()).await?;
        Ok(!result.rows.is_empty())
    }

    async fn close(&self) -> DatabaseResult<()> {
        // The driver releases pooled connections when the graph is dropped
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_to_bolt_scalars() {
        assert!(matches!(
            Neo4jDatabase::param_to_bolt(&QueryParameter::String("personFulltext".into())),
            Ok(BoltType::String(_))
        ));
        assert!(matches!(
            Neo4jDatabase::param_to_bolt(&QueryParameter::Integer(3)),
            Ok(BoltType::Integer(_))
        ));
        assert!(matches!(
            Neo4jDatabase::param_to_bolt(&QueryParameter::Null),
            Ok(BoltType::Null(_))
        ));
    }

    #[test]
    fn test_param_to_bolt_rejects_nan() {
        let err = Neo4jDatabase::param_to_bolt(&QueryParameter::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidParameter(_)));
    }

    #[test]
    fn test_bolt_conversion_keeps_values() {
        let mut map = HashMap::new();
        map.insert("candidate".to_string(), QueryParameter::from("Tom Hanks"));
        map.insert("label".to_string(), QueryParameter::from("Person"));
        let original = QueryParameter::List(vec![
            QueryParameter::Map(map),
            QueryParameter::Integer(1999),
            QueryParameter::Boolean(true),
            QueryParameter::Null,
        ]);

        let bolt = Neo4jDatabase::param_to_bolt(&original).unwrap();
        assert_eq!(Neo4jDatabase::bolt_to_param(&bolt), original);
    }

    #[tokio::test]
    #[ignore] // Requires a running Neo4j instance configured through NEO4J_* variables
    async fn test_health_check_against_live_database() {
        let config = DatabaseConfig::from_env().expect("NEO4J_* variables must be set");
        let db = Neo4jDatabase::new(config).await.unwrap();
        assert!(db.health_check().await.unwrap());
    }
}
