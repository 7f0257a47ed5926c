use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    store::read_json_artifact,
};

/// Dense, square matrix of precomputed pairwise similarity scores
///
/// Stored row-major in a single allocation. Higher scores mean more similar.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds the matrix from rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<f32>>) -> AppResult<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AppError::DimensionMismatch(format!(
                    "similarity matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Loads the similarity artifact from disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let rows: Vec<Vec<f32>> = read_json_artifact(path)?;
        Self::from_rows(rows)
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}
