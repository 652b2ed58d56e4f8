use axum::Router;

pub mod retrieve;

/// Create the main API router
pub fn create_router() -> Router {
    Router::new().nest("/retrieve", retrieve::create_router())
}
