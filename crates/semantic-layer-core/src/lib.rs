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

//! # Semantic Layer Core
//!
//! Full-text entity lookup for a movie knowledge graph stored in Neo4j.
//!
//! User text is stripped of Lucene special characters, turned into a fuzzy
//! query against the `name` or `title` property, and run against the
//! `personFulltext` / `movieFulltext` indexes to find candidate nodes.

pub mod database;
pub mod errors;
pub mod search;
pub mod semantic_layer;
pub mod types;

// Re-export commonly used types
pub use errors::{SemanticLayerError, SemanticLayerResult};
pub use semantic_layer::SemanticLayer;
pub use types::EntityType;

// Re-export traits
pub use database::GraphDatabase;

// Re-export concrete types
pub use database::{DatabaseConfig, DatabaseError, Neo4jDatabase, QueryParameter, QueryResult};
pub use search::{
    generate_fulltext_query, remove_lucene_chars, Candidate, CandidateFetcher,
    DEFAULT_CANDIDATE_LIMIT, FUZZY_SIMILARITY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports() {
        // This test ensures that all the main exports are available
        // and can be used together
        let _config = DatabaseConfig::default();
        let _entity_type = EntityType::Movie;
        assert_eq!(DEFAULT_CANDIDATE_LIMIT, 3);
    }
}
