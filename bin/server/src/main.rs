use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dto;
mod routers;
mod service;

use config::Settings;
use service::SemanticLayerService;

/// Health check endpoint
#[instrument(skip_all)]
async fn healthcheck(
    Extension(service): Extension<Arc<SemanticLayerService>>,
) -> (StatusCode, Json<Value>) {
    if service.is_healthy().await {
        (StatusCode::OK, Json(json!({"status": "healthy"})))
    } else {
        warn!("Graph database health check failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "unhealthy"})),
        )
    }
}

/// Build the router with all routes around an existing service
pub(crate) fn build_router(service: Arc<SemanticLayerService>) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .nest("/api", routers::create_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
                .layer(CorsLayer::permissive())
                .layer(Extension(service)),
        )
}

/// Initialize the Axum web server
async fn create_app(settings: Settings) -> Result<Router, anyhow::Error> {
    let service = Arc::new(SemanticLayerService::new(settings).await?);
    Ok(build_router(service))
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "semantic_layer_server=debug,semantic_layer_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::load()?;
    info!("Starting semantic layer server with settings: {:?}", settings);

    // Create the app
    let app = create_app(settings.clone()).await?;

    // Start the server
    let listener = tokio::net::TcpListener::bind(&settings.server_address()).await?;
    info!("Server listening on {}", settings.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use semantic_layer_core::{
        database::DatabaseResult, DatabaseError, GraphDatabase, QueryParameter, QueryResult,
        SemanticLayer,
    };
    use tower::ServiceExt;

    use super::*;

    struct HealthStub {
        healthy: bool,
    }

    #[async_trait]
    impl GraphDatabase for HealthStub {
        async fn execute(
            &self,
            _query: &str,
            _parameters: HashMap<String, QueryParameter>,
        ) -> DatabaseResult<QueryResult> {
            Ok(QueryResult::default())
        }

        async fn health_check(&self) -> DatabaseResult<bool> {
            if self.healthy {
                Ok(true)
            } else {
                Err(DatabaseError::Connection("connection refused".to_string()))
            }
        }

        async fn close(&self) -> DatabaseResult<()> {
            Ok(())
        }
    }

    async fn healthcheck_status(healthy: bool) -> StatusCode {
        let layer = SemanticLayer::with_database(Arc::new(HealthStub { healthy }));
        let app = build_router(Arc::new(SemanticLayerService::with_layer(layer, 3)));
        let request = Request::builder()
            .uri("/healthcheck")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_healthcheck_healthy() {
        assert_eq!(healthcheck_status(true).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthcheck_unhealthy() {
        assert_eq!(
            healthcheck_status(false).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
