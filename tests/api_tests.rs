use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;

use movie_recommender::{
    models::{
        CatalogRecord, Metric, MovieDetails, MovieId, TrendingEntry, NO_IMAGE_PLACEHOLDER,
    },
    routes::{create_router, AppState},
    services::{providers::MetadataProvider, RecommendationService},
    store::{Catalog, MovieIndex, SimilarityMatrix},
};

/// Provider answering from memory so the router can be tested offline
struct StubProvider;

#[async_trait::async_trait]
impl MetadataProvider for StubProvider {
    async fn fetch_details(&self, movie_id: MovieId) -> MovieDetails {
        MovieDetails {
            poster_url: format!("https://image.tmdb.org/t/p/w500/{}.jpg", movie_id),
            rating: Metric::Value(7.0),
            genres: "Action, Adventure".to_string(),
            popularity: Metric::Value(42.0),
            release_date: "2009-12-10".to_string(),
            overview: format!("Overview of {}", movie_id),
            trailer_url: Some(format!("https://www.youtube.com/watch?v=t{}", movie_id)),
        }
    }

    async fn fetch_trending(&self) -> Vec<TrendingEntry> {
        (1..=8)
            .map(|i| TrendingEntry {
                title: format!("Trending {}", i),
                poster_url: NO_IMAGE_PLACEHOLDER.to_string(),
                movie_id: MovieId(900 + i),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

const TITLES: [&str; 7] = [
    "Avatar",
    "Pirates of the Caribbean: At World's End",
    "Spectre",
    "The Dark Knight Rises",
    "John Carter",
    "Spider-Man 3",
    "The Dark Knight",
];

fn create_test_server() -> TestServer {
    let catalog = Catalog::from_records(
        TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| CatalogRecord {
                movie_id: MovieId(100 + i as u64),
                title: title.to_string(),
            })
            .collect(),
    );

    let size = TITLES.len();
    let rows: Vec<Vec<f32>> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        // Closer catalog positions are more similar
                        1.0 / (1.0 + (i as f32 - j as f32).abs())
                    }
                })
                .collect()
        })
        .collect();

    let index = MovieIndex::new(catalog, SimilarityMatrix::from_rows(rows).unwrap()).unwrap();
    let recommender = RecommendationService::new(Arc::new(index), Arc::new(StubProvider));

    TestServer::new(create_router(AppState::new(recommender))).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog_size"], 7);
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let server = create_test_server();

    let generated = server.get("/health").await;
    let header = generated.header("x-request-id");
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());

    let supplied = "6f1c2f9e-3c3a-4f0e-9a55-0b8f4a1c2d3e";
    let echoed = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(supplied),
        )
        .await;
    assert_eq!(echoed.header("x-request-id").to_str().unwrap(), supplied);
}

#[tokio::test]
async fn test_search_titles() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/search")
        .add_query_param("q", "dark knight")
        .await;

    response.assert_status_ok();
    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "The Dark Knight Rises");
    assert_eq!(results[1]["title"], "The Dark Knight");
    assert_eq!(results[1]["movie_id"], 106);
}

#[tokio::test]
async fn test_search_without_query_lists_catalog() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/search")
        .add_query_param("limit", 3)
        .await;

    response.assert_status_ok();
    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["title"], "Avatar");
}

#[tokio::test]
async fn test_recommendations_ranked_and_enriched() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Spectre")
        .await;

    response.assert_status_ok();
    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 5);

    // Spectre is index 2: neighbors at distance 1 (1, 3), then 2 (0, 4), then 3 (5)
    let indices: Vec<u64> = results
        .iter()
        .map(|r| r["catalog_index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![1, 3, 0, 4, 5]);

    assert_eq!(results[0]["title"], "Pirates of the Caribbean: At World's End");
    assert_eq!(results[0]["movie_id"], 101);
    assert_eq!(results[0]["details"]["genres"], "Action, Adventure");
    assert_eq!(
        results[0]["details"]["trailer_url"],
        "https://www.youtube.com/watch?v=t101"
    );
    assert!(results.iter().all(|r| r["title"] != "Spectre"));
}

#[tokio::test]
async fn test_recommendations_unknown_title() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "__not_a_real_title__")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Movie not found. Please select a valid movie from the list."
    );
}

#[tokio::test]
async fn test_recommendations_title_is_case_sensitive() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "avatar")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recommendations_empty_title() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_selected_movie() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/movies/selected")
        .add_query_param("title", "Avatar")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["movie"]["catalog_index"], 0);
    assert_eq!(body["movie"]["movie_id"], 100);
    assert_eq!(body["details"]["overview"], "Overview of 100");
    assert_eq!(body["details"]["rating"], 7.0);
}

#[tokio::test]
async fn test_movie_details_by_id() {
    let server = create_test_server();

    let response = server.get("/api/v1/movies/19995/details").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["poster_url"],
        "https://image.tmdb.org/t/p/w500/19995.jpg"
    );
    assert_eq!(body["release_date"], "2009-12-10");
}

#[tokio::test]
async fn test_trending_with_limit() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/trending")
        .add_query_param("limit", 5)
        .await;

    response.assert_status_ok();
    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0]["title"], "Trending 1");
    assert_eq!(results[4]["movie_id"], 905);
}

#[tokio::test]
async fn test_trending_without_limit() {
    let server = create_test_server();

    let response = server.get("/api/v1/trending").await;

    response.assert_status_ok();
    let results: Vec<Value> = response.json();
    assert_eq!(results.len(), 8);
}
