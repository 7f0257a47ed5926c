/// Movie metadata provider abstraction
///
/// Providers decorate catalog entries with live data (posters, ratings, trailers)
/// and supply the trending list. Lookups never fail from the caller's point of
/// view: a provider that cannot answer returns fallback values instead.
use crate::models::{MovieDetails, MovieId, TrendingEntry};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch details and trailer link for one movie
    ///
    /// Returns [`MovieDetails::fallback`] when the provider is unreachable or
    /// answers with something unusable.
    async fn fetch_details(&self, movie_id: MovieId) -> MovieDetails;

    /// Fetch today's trending movies in provider order
    ///
    /// Returns an empty list on any failure.
    async fn fetch_trending(&self) -> Vec<TrendingEntry>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
