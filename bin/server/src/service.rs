use anyhow::Result;
use semantic_layer_core::{Candidate, EntityType, SemanticLayer, SemanticLayerResult};

use crate::config::Settings;

/// Service layer that owns the semantic layer and applies server defaults
pub struct SemanticLayerService {
    layer: SemanticLayer,
    default_limit: usize,
}

impl SemanticLayerService {
    /// Create a new SemanticLayerService connected to the configured database
    pub async fn new(settings: Settings) -> Result<Self> {
        let layer = SemanticLayer::new(settings.database_config())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to Neo4j: {}", e))?;

        Ok(Self::with_layer(layer, settings.candidate_limit))
    }

    /// Wrap an already constructed semantic layer
    pub fn with_layer(layer: SemanticLayer, default_limit: usize) -> Self {
        Self {
            layer,
            default_limit,
        }
    }

    /// Look up candidate entities, falling back to the configured limit
    pub async fn candidates(
        &self,
        query: &str,
        entity_type: EntityType,
        limit: Option<usize>,
    ) -> SemanticLayerResult<Vec<Candidate>> {
        self.layer
            .fetch_candidates(query, entity_type, Some(limit.unwrap_or(self.default_limit)))
            .await
    }

    /// Build the full-text query that a candidate lookup would run
    pub fn fulltext_query(&self, query: &str, entity_type: EntityType) -> SemanticLayerResult<String> {
        self.layer.fulltext_query(query, entity_type)
    }

    /// Whether the database currently answers queries
    pub async fn is_healthy(&self) -> bool {
        matches!(self.layer.health_check().await, Ok(true))
    }
}
