use std::collections::HashMap;
use std::path::Path;

use crate::{
    error::AppResult,
    models::{CatalogRecord, Movie},
    store::read_json_artifact,
};

/// In-memory table of every movie the recommender knows about
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    /// Title -> index of the first record carrying that title
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog, assigning catalog indices in record order
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut by_title = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;

        let movies: Vec<Movie> = records
            .into_iter()
            .enumerate()
            .map(|(catalog_index, record)| {
                if by_title.contains_key(&record.title) {
                    duplicates += 1;
                    tracing::warn!(
                        title = %record.title,
                        catalog_index,
                        first_index = by_title[&record.title],
                        "Duplicate catalog title; lookups resolve to the first entry"
                    );
                } else {
                    by_title.insert(record.title.clone(), catalog_index);
                }

                Movie {
                    catalog_index,
                    movie_id: record.movie_id,
                    title: record.title,
                }
            })
            .collect();

        tracing::debug!(
            movies = movies.len(),
            duplicate_titles = duplicates,
            "Catalog built"
        );

        Self { movies, by_title }
    }

    /// Loads the catalog artifact from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let records: Vec<CatalogRecord> = read_json_artifact(path)?;
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, catalog_index: usize) -> Option<&Movie> {
        self.movies.get(catalog_index)
    }

    /// Exact, case-sensitive title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.by_title
            .get(title)
            .and_then(|&index| self.movies.get(index))
    }

    /// Case-insensitive substring search over titles, in catalog order
    ///
    /// A blank query matches every movie.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.movies.iter().collect();
        }

        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}
