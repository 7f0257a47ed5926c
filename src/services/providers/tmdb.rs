/// The Movie Database (TMDB) provider
///
/// API Flow:
/// 1. Details: /movie/{id} → poster, rating, genres, popularity, release date, overview
/// 2. Trailer: /movie/{id}/videos → first YouTube trailer
/// 3. Trending: /trending/movie/day → today's trending movies
///
/// Every request carries the API key as a query parameter. Nothing is cached.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    config::Config,
    error::{AppResult, MetadataError},
    models::{
        Metric, MovieDetails, MovieId, TmdbMovieDetails, TmdbTrendingPage, TmdbVideoList,
        TrendingEntry, NOT_AVAILABLE, NO_IMAGE_PLACEHOLDER, NO_OVERVIEW,
    },
    services::providers::MetadataProvider,
};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const TRAILER_BASE_URL: &str = "https://www.youtube.com/watch?v=";
const TRAILER_SITE: &str = "YouTube";
const TRAILER_TYPE: &str = "Trailer";
const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.request_timeout(),
        )
    }

    /// GET `{api_url}{path}` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(path = %path, "TMDB request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(MetadataError::Transport)?;

        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status()));
        }

        let body = response.bytes().await.map_err(MetadataError::Transport)?;
        serde_json::from_slice(&body).map_err(|e| MetadataError::Malformed(e.to_string()))
    }

    async fn try_fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, MetadataError> {
        let details_path = format!("/movie/{}", movie_id);
        let videos_path = format!("/movie/{}/videos", movie_id);

        let (details, videos) = tokio::try_join!(
            self.get_json::<TmdbMovieDetails>(&details_path, &[("language", LANGUAGE)]),
            self.get_json::<TmdbVideoList>(&videos_path, &[("language", LANGUAGE)]),
        )?;

        Ok(build_details(details, &videos))
    }

    async fn try_fetch_trending(&self) -> Result<Vec<TrendingEntry>, MetadataError> {
        let page: TmdbTrendingPage = self.get_json("/trending/movie/day", &[]).await?;
        Ok(build_trending(page))
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch_details(&self, movie_id: MovieId) -> MovieDetails {
        match self.try_fetch_details(movie_id).await {
            Ok(details) => {
                tracing::info!(
                    movie_id = %movie_id,
                    has_trailer = details.trailer_url.is_some(),
                    provider = "tmdb",
                    "Movie details fetched"
                );
                details
            }
            Err(e) => {
                tracing::warn!(
                    movie_id = %movie_id,
                    kind = e.kind(),
                    error = %e,
                    provider = "tmdb",
                    "Movie details unavailable, using fallback"
                );
                MovieDetails::fallback()
            }
        }
    }

    async fn fetch_trending(&self) -> Vec<TrendingEntry> {
        match self.try_fetch_trending().await {
            Ok(entries) => {
                tracing::info!(
                    results = entries.len(),
                    provider = "tmdb",
                    "Trending movies fetched"
                );
                entries
            }
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    error = %e,
                    provider = "tmdb",
                    "Trending movies unavailable"
                );
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

/// Full poster URL, or the "no image" placeholder when there is no artwork
fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}", POSTER_BASE_URL, path.trim_start_matches('/')),
        None => NO_IMAGE_PLACEHOLDER.to_string(),
    }
}

/// First YouTube trailer in the video list
fn trailer_url(videos: &TmdbVideoList) -> Option<String> {
    videos
        .results
        .iter()
        .find(|video| {
            video.site.as_deref() == Some(TRAILER_SITE)
                && video.video_type.as_deref() == Some(TRAILER_TYPE)
                && video.key.is_some()
        })
        .and_then(|video| video.key.as_ref())
        .map(|key| format!("{}{}", TRAILER_BASE_URL, key))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Maps the TMDB payloads onto [`MovieDetails`]; blank strings count as missing
fn build_details(details: TmdbMovieDetails, videos: &TmdbVideoList) -> MovieDetails {
    let genres = details
        .genres
        .unwrap_or_default()
        .into_iter()
        .filter_map(|genre| genre.name)
        .collect::<Vec<_>>()
        .join(", ");

    MovieDetails {
        poster_url: poster_url(details.poster_path.as_deref()),
        rating: Metric::from(details.vote_average),
        genres,
        popularity: Metric::from(details.popularity),
        release_date: non_blank(details.release_date)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        overview: non_blank(details.overview).unwrap_or_else(|| NO_OVERVIEW.to_string()),
        trailer_url: trailer_url(videos),
    }
}

/// Maps trending results in order; entries without an id or title are dropped
fn build_trending(page: TmdbTrendingPage) -> Vec<TrendingEntry> {
    page.results
        .into_iter()
        .filter_map(|movie| {
            let (Some(id), Some(title)) = (movie.id, movie.title) else {
                tracing::debug!("Skipping trending entry without id or title");
                return None;
            };

            Some(TrendingEntry {
                title,
                poster_url: poster_url(movie.poster_path.as_deref()),
                movie_id: MovieId(id),
            })
        })
        .collect()
}
