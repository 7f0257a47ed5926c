use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{models::TrendingEntry, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    limit: Option<usize>,
}

/// Handler for today's trending movies
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendingQuery>,
) -> Json<Vec<TrendingEntry>> {
    let mut entries = state.recommender.provider().fetch_trending().await;

    if let Some(limit) = params.limit {
        entries.truncate(limit);
    }

    Json(entries)
}
