use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::{providers::TmdbProvider, RecommendationService},
    store::MovieIndex,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recommender=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Artifacts are required; a bad catalog or matrix aborts startup
    let index = MovieIndex::load(
        Path::new(&config.catalog_path),
        Path::new(&config.similarity_path),
    )
    .context("Failed to load movie index")?;

    let provider = TmdbProvider::from_config(&config).context("Failed to build TMDB client")?;
    let recommender = RecommendationService::new(Arc::new(index), Arc::new(provider));

    let app = create_router(AppState::new(recommender));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
