/// Read-only movie data loaded once at startup
///
/// The catalog and the similarity matrix are produced offline and shipped as JSON
/// artifacts. They are validated against each other on load and then shared
/// immutably (behind an `Arc`) for the lifetime of the process.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{AppError, AppResult};

pub mod catalog;
pub mod index;
pub mod similarity;

pub use catalog::Catalog;
pub use index::{MovieIndex, RECOMMENDATION_COUNT};
pub use similarity::SimilarityMatrix;

/// Reads and deserializes a JSON artifact from disk
pub(crate) fn read_json_artifact<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let artifact_error = |reason: String| AppError::Artifact {
        path: path.display().to_string(),
        reason,
    };

    let raw = std::fs::read(path).map_err(|e| artifact_error(e.to_string()))?;
    serde_json::from_slice(&raw).map_err(|e| artifact_error(e.to_string()))
}
