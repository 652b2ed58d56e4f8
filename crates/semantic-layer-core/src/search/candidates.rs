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

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::database::{DatabaseError, GraphDatabase, QueryParameter, QueryResult};
use crate::errors::{SemanticLayerError, SemanticLayerResult};
use crate::search::fulltext::generate_fulltext_query;
use crate::types::EntityType;

pub const DEFAULT_CANDIDATE_LIMIT: usize = 3;

/// Looks up nodes in a full-text index and reports their display value and label
pub const CANDIDATE_QUERY: &str = "
CALL db.index.fulltext.queryNodes($index, $fulltextQuery, {limit: $limit})
YIELD node
RETURN coalesce(node.name, node.title) AS candidate,
       [el in labels(node) WHERE el IN ['Person', 'Movie'] | el][0] AS label
";

/// An entity matched by full-text search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The node's `name`, or its `title` when it has no name
    pub candidate: String,
    /// First of `Person`/`Movie` found on the node, if any
    pub label: Option<String>,
}

impl Candidate {
    fn from_row(row: &HashMap<String, QueryParameter>) -> SemanticLayerResult<Self> {
        let candidate = QueryResult::optional_string(row, "candidate")?.ok_or_else(|| {
            DatabaseError::Serialization("candidate row has no name or title".to_string())
        })?;
        let label = QueryResult::optional_string(row, "label")?;
        Ok(Self { candidate, label })
    }
}

/// Fetches candidate entities through the per-type full-text indexes
#[derive(Clone)]
pub struct CandidateFetcher {
    driver: Arc<dyn GraphDatabase + Send + Sync>,
}

impl CandidateFetcher {
    pub fn new(driver: Arc<dyn GraphDatabase + Send + Sync>) -> Self {
        Self { driver }
    }

    /// Retrieve entities whose indexed property fuzzily matches every word of `input`.
    ///
    /// `limit` defaults to [`DEFAULT_CANDIDATE_LIMIT`]. Candidates come back in the
    /// order the database ranked them.
    #[instrument(skip(self))]
    pub async fn fetch_candidates(
        &self,
        input: &str,
        entity_type: EntityType,
        limit: Option<usize>,
    ) -> SemanticLayerResult<Vec<Candidate>> {
        let limit = limit.unwrap_or(DEFAULT_CANDIDATE_LIMIT);
        if limit == 0 {
            return Err(SemanticLayerError::InvalidLimit { limit });
        }
        let bound_limit =
            i64::try_from(limit).map_err(|_| SemanticLayerError::InvalidLimit { limit })?;

        let fulltext_query = generate_fulltext_query(input, entity_type)?;

        let mut params: HashMap<String, QueryParameter> = HashMap::new();
        params.insert("index".to_string(), entity_type.fulltext_index().into());
        params.insert("fulltextQuery".to_string(), fulltext_query.into());
        params.insert("limit".to_string(), bound_limit.into());

        let result = self.driver.execute(CANDIDATE_QUERY, params).await?;

        let candidates = result
            .rows
            .iter()
            .map(Candidate::from_row)
            .collect::<SemanticLayerResult<Vec<_>>>()?;

        debug!(count = candidates.len(), "fetched candidates");
        Ok(candidates)
    }
}
