use serde::Serialize;

use crate::{models::MovieId, store::Catalog};

/// A catalog title offered to the user for selection
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleMatch {
    pub catalog_index: usize,
    pub movie_id: MovieId,
    pub title: String,
}

/// Filters the catalog for the search box
///
/// Matches are case-insensitive substrings, returned in catalog order and capped at
/// `limit` when one is given.
pub fn search_titles(catalog: &Catalog, query: &str, limit: Option<usize>) -> Vec<TitleMatch> {
    let matches = catalog.search(query);
    let limit = limit.unwrap_or(matches.len());

    matches
        .into_iter()
        .take(limit)
        .map(|movie| TitleMatch {
            catalog_index: movie.catalog_index,
            movie_id: movie.movie_id,
            title: movie.title.clone(),
        })
        .collect()
}
