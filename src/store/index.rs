use std::cmp::Ordering;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, Recommendation},
    store::{Catalog, SimilarityMatrix},
};

/// Number of neighbors returned for a query
pub const RECOMMENDATION_COUNT: usize = 5;

/// Immutable pairing of the catalog with its similarity matrix
///
/// Row `i` of the matrix describes catalog record `i`; construction fails if the
/// two artifacts disagree on size.
#[derive(Debug, Clone)]
pub struct MovieIndex {
    catalog: Catalog,
    similarity: SimilarityMatrix,
}

impl MovieIndex {
    pub fn new(catalog: Catalog, similarity: SimilarityMatrix) -> AppResult<Self> {
        if catalog.len() != similarity.size() {
            return Err(AppError::DimensionMismatch(format!(
                "catalog has {} movies but similarity matrix is {}x{}",
                catalog.len(),
                similarity.size(),
                similarity.size()
            )));
        }

        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Loads and cross-checks both artifacts
    pub fn load(catalog_path: &Path, similarity_path: &Path) -> AppResult<Self> {
        let catalog = Catalog::load(catalog_path)?;
        let similarity = SimilarityMatrix::load(similarity_path)?;
        let index = Self::new(catalog, similarity)?;

        tracing::info!(
            movies = index.catalog.len(),
            catalog = %catalog_path.display(),
            similarity = %similarity_path.display(),
            "Movie index loaded"
        );

        Ok(index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves a title to its catalog record
    pub fn resolve(&self, title: &str) -> AppResult<&Movie> {
        self.catalog
            .find_by_title(title)
            .ok_or_else(AppError::movie_not_found)
    }

    /// Top neighbors of `title`, most similar first
    pub fn recommend(&self, title: &str) -> AppResult<Vec<Recommendation>> {
        let movie = self.resolve(title)?;
        let recommendations = self.neighbors(movie.catalog_index, RECOMMENDATION_COUNT);

        tracing::debug!(
            title = %title,
            catalog_index = movie.catalog_index,
            results = recommendations.len(),
            "Recommendations ranked"
        );

        Ok(recommendations)
    }

    /// Ranks every other catalog entry against `catalog_index` and keeps the first `limit`
    ///
    /// Ties on score are broken by ascending catalog index. The query itself is never
    /// part of the result.
    pub fn neighbors(&self, catalog_index: usize, limit: usize) -> Vec<Recommendation> {
        let Some(row) = self.similarity.row(catalog_index) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != catalog_index)
            .collect();
        ranked.sort_by(rank_order);

        ranked
            .into_iter()
            .take(limit)
            .filter_map(|(j, score)| {
                self.catalog.get(j).map(|movie| Recommendation {
                    catalog_index: j,
                    movie_id: movie.movie_id,
                    title: movie.title.clone(),
                    score,
                })
            })
            .collect()
    }
}

/// Descending score, then ascending index. NaN ranks last.
fn rank_order(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    sort_key(b.1)
        .total_cmp(&sort_key(a.1))
        .then(a.0.cmp(&b.0))
}

fn sort_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}
