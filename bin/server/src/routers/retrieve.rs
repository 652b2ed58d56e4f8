use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use semantic_layer_core::{EntityType, SemanticLayerError};
use tracing::{error, warn};
use validator::Validate;

use crate::{
    dto::{
        CandidatesRequest, CandidatesResponse, ErrorResponse, FulltextQueryRequest,
        FulltextQueryResponse,
    },
    service::SemanticLayerService,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create retrieve router
pub fn create_router() -> Router {
    Router::new()
        .route("/candidates", post(candidates))
        .route("/fulltext-query", post(fulltext_query))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    warn!("Rejected request body: {}", rejection.body_text());
    bad_request(rejection.body_text())
}

fn error_response(err: SemanticLayerError) -> ApiError {
    let status = match &err {
        e if e.is_invalid_argument() => StatusCode::BAD_REQUEST,
        SemanticLayerError::Database(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::BAD_REQUEST {
        warn!("Rejected request: {}", err);
    } else {
        error!("Candidate lookup failed: {}", err);
    }

    (status, Json(ErrorResponse::new(err.to_string())))
}

fn parse_entity_type(entity_type: &str) -> Result<EntityType, ApiError> {
    entity_type.parse().map_err(error_response)
}

/// Find candidate entities for free-form text
async fn candidates(
    Extension(service): Extension<Arc<SemanticLayerService>>,
    payload: Result<Json<CandidatesRequest>, JsonRejection>,
) -> Result<Json<CandidatesResponse>, ApiError> {
    let Json(request) = payload.map_err(rejected_body)?;
    request.validate().map_err(|e| bad_request(e.to_string()))?;
    let entity_type = parse_entity_type(&request.entity_type)?;

    let candidates = service
        .candidates(&request.query, entity_type, request.limit)
        .await
        .map_err(error_response)?;

    Ok(Json(CandidatesResponse { candidates }))
}

/// Show the full-text query generated for free-form text
async fn fulltext_query(
    Extension(service): Extension<Arc<SemanticLayerService>>,
    payload: Result<Json<FulltextQueryRequest>, JsonRejection>,
) -> Result<Json<FulltextQueryResponse>, ApiError> {
    let Json(request) = payload.map_err(rejected_body)?;
    request.validate().map_err(|e| bad_request(e.to_string()))?;
    let entity_type = parse_entity_type(&request.entity_type)?;

    let fulltext_query = service
        .fulltext_query(&request.query, entity_type)
        .map_err(error_response)?;

    Ok(Json(FulltextQueryResponse { fulltext_query }))
}
