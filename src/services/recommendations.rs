use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{EnrichedRecommendation, MovieDetails, MovieId, SelectedMovie},
    services::providers::MetadataProvider,
    store::MovieIndex,
};

/// Recommends movies similar to a selected title and decorates them with live metadata
///
/// Ranking comes from the precomputed similarity matrix held by [`MovieIndex`];
/// metadata comes from the configured [`MetadataProvider`].
#[derive(Clone)]
pub struct RecommendationService {
    index: Arc<MovieIndex>,
    provider: Arc<dyn MetadataProvider>,
}

impl RecommendationService {
    pub fn new(index: Arc<MovieIndex>, provider: Arc<dyn MetadataProvider>) -> Self {
        Self { index, provider }
    }

    pub fn index(&self) -> &MovieIndex {
        &self.index
    }

    pub fn provider(&self) -> &Arc<dyn MetadataProvider> {
        &self.provider
    }

    /// Top neighbors of `title`, each enriched with its details
    ///
    /// Details are fetched concurrently; the result keeps similarity order.
    pub async fn recommend_with_details(
        &self,
        title: &str,
    ) -> AppResult<Vec<EnrichedRecommendation>> {
        let recommendations = self.index.recommend(title)?;

        let movie_ids: Vec<MovieId> = recommendations.iter().map(|r| r.movie_id).collect();
        let details = self.fetch_details_batch(movie_ids).await;

        tracing::info!(
            title = %title,
            results = recommendations.len(),
            provider = self.provider.name(),
            "Recommendations enriched"
        );

        Ok(recommendations
            .into_iter()
            .zip(details)
            .map(|(recommendation, details)| EnrichedRecommendation {
                recommendation,
                details,
            })
            .collect())
    }

    /// The catalog record for `title` plus its details
    pub async fn selected_movie(&self, title: &str) -> AppResult<SelectedMovie> {
        let movie = self.index.resolve(title)?.clone();
        let details = self.provider.fetch_details(movie.movie_id).await;

        Ok(SelectedMovie { movie, details })
    }

    /// Fetches details for every id in parallel, returning them in input order
    ///
    /// A task that fails to complete yields fallback details for its slot only.
    async fn fetch_details_batch(&self, movie_ids: Vec<MovieId>) -> Vec<MovieDetails> {
        let mut tasks = Vec::with_capacity(movie_ids.len());

        for movie_id in movie_ids {
            let provider = Arc::clone(&self.provider);
            let task = tokio::spawn(async move { provider.fetch_details(movie_id).await });
            tasks.push((movie_id, task));
        }

        let mut results = Vec::with_capacity(tasks.len());

        for (movie_id, task) in tasks {
            match task.await {
                Ok(details) => results.push(details),
                Err(e) => {
                    tracing::error!(
                        movie_id = %movie_id,
                        error = %e,
                        "Details task join error"
                    );
                    results.push(MovieDetails::fallback());
                }
            }
        }

        results
    }
}
