use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{MovieDetails, MovieId, SelectedMovie},
    routes::AppState,
    services::title_search::{search_titles, TitleMatch},
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    title: String,
}

/// Handler for catalog title search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<TitleMatch>> {
    let catalog = state.recommender.index().catalog();
    Json(search_titles(catalog, &params.q, params.limit))
}

/// Handler for the selected movie panel
pub async fn selected(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<TitleQuery>,
) -> AppResult<Json<SelectedMovie>> {
    if params.title.is_empty() {
        return Err(AppError::InvalidInput("title cannot be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        "Fetching selected movie"
    );

    let selected = state.recommender.selected_movie(&params.title).await?;
    Ok(Json(selected))
}

/// Handler for raw movie details by TMDB id
pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<u64>,
) -> Json<MovieDetails> {
    let details = state
        .recommender
        .provider()
        .fetch_details(MovieId(movie_id))
        .await;
    Json(details)
}
