use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// Text used wherever a metadata value could not be obtained
pub const NOT_AVAILABLE: &str = "N/A";

/// Overview used when the provider has none (or could not be reached)
pub const NO_OVERVIEW: &str = "No overview available.";

/// Poster shown when a movie has no poster artwork
pub const NO_IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/500x750?text=No+Image+Available";

/// Poster shown when metadata could not be fetched at all
pub const ERROR_PLACEHOLDER: &str =
    "https://via.placeholder.com/500x750?text=Error+Fetching+Poster";

/// External (TMDB) identifier of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry; `catalog_index` is its row in the similarity matrix
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub catalog_index: usize,
    pub movie_id: MovieId,
    pub title: String,
}

/// Numeric metadata value that falls back to "N/A"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Unavailable,
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map(Metric::Value).unwrap_or(Metric::Unavailable)
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{}", v),
            Metric::Unavailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => serializer.serialize_f64(*v),
            Metric::Unavailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Per-movie metadata, built fresh for every request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieDetails {
    pub poster_url: String,
    pub rating: Metric,
    pub genres: String,
    pub popularity: Metric,
    pub release_date: String,
    pub overview: String,
    pub trailer_url: Option<String>,
}

impl MovieDetails {
    /// Details rendered when the provider could not be queried
    pub fn fallback() -> Self {
        Self {
            poster_url: ERROR_PLACEHOLDER.to_string(),
            rating: Metric::Unavailable,
            genres: NOT_AVAILABLE.to_string(),
            popularity: Metric::Unavailable,
            release_date: NOT_AVAILABLE.to_string(),
            overview: NO_OVERVIEW.to_string(),
            trailer_url: None,
        }
    }
}

/// One entry of the daily trending list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendingEntry {
    pub title: String,
    pub poster_url: String,
    pub movie_id: MovieId,
}

/// A ranked neighbor of the queried movie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub catalog_index: usize,
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
}

/// A recommendation decorated with live metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub details: MovieDetails,
}

/// The movie picked by the user together with its metadata
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectedMovie {
    pub movie: Movie,
    pub details: MovieDetails,
}

// ============================================================================
// Load-time artifact types
// ============================================================================

/// Catalog row as stored in the catalog artifact
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub movie_id: MovieId,
    pub title: String,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Response from GET /movie/{id}
///
/// Every field is optional so a partial payload still yields usable details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Option<Vec<TmdbGenre>>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    #[serde(default)]
    pub name: Option<String>,
}

/// Response from GET /movie/{id}/videos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbVideoList {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbVideo {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub video_type: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Response from GET /trending/movie/day
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbTrendingPage {
    #[serde(default)]
    pub results: Vec<TmdbTrendingMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTrendingMovie {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}
