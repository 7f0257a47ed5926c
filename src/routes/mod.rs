use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    services::RecommendationService,
};

pub mod movies;
pub mod recommendations;
pub mod trending;

/// Shared application state
pub struct AppState {
    pub recommender: RecommendationService,
}

impl AppState {
    pub fn new(recommender: RecommendationService) -> Self {
        Self { recommender }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies/search", get(movies::search))
        .route("/movies/selected", get(movies::selected))
        .route("/movies/:movie_id/details", get(movies::details))
        .route("/recommendations", get(recommendations::recommend))
        .route("/trending", get(trending::trending))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let catalog_size = state.recommender.index().catalog().len();
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "catalog_size": catalog_size })),
    )
}
