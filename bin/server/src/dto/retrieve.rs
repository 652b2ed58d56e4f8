use semantic_layer_core::Candidate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate lookup request
#[derive(Debug, Deserialize, Validate)]
pub struct CandidatesRequest {
    #[validate(length(min = 1))]
    pub query: String,
    pub entity_type: String,
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}

/// Candidate lookup response
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<Candidate>,
}

/// Request to preview the generated full-text query
#[derive(Debug, Deserialize, Validate)]
pub struct FulltextQueryRequest {
    #[validate(length(min = 1))]
    pub query: String,
    pub entity_type: String,
}

/// Generated full-text query
#[derive(Debug, Serialize, Deserialize)]
pub struct FulltextQueryResponse {
    pub fulltext_query: String,
}
