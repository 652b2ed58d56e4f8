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

//! Database abstraction layer
//!
//! The rest of the crate talks to the graph through [`GraphDatabase`], so a
//! stub can stand in for Neo4j in tests.

use std::sync::Arc;

pub mod config;
pub mod neo4j;
pub mod traits;
pub mod types;

pub use config::DatabaseConfig;
pub use neo4j::Neo4jDatabase;
pub use traits::{GraphDatabase, QueryParameter, QueryResult};
pub use types::{DatabaseError, DatabaseResult};

/// Connect to the database described by `config`
pub async fn create_database(
    config: DatabaseConfig,
) -> DatabaseResult<Arc<dyn GraphDatabase + Send + Sync>> {
    let db = Neo4jDatabase::new(config).await?;
    Ok(Arc::new(db))
}
