//! Error types for building and querying a `CatalogIndex`.
//!
//! Only index construction can fail in practice. Queries with no match
//! (unknown title, empty filter result) return empty lists, not errors.

use catalog::DataLoadError;
use similarity::VectorizerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// The dataset is missing or unparsable
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(#[from] DataLoadError),

    /// The dataset parsed but holds no titles to fit a model on
    #[error("Dataset unavailable: catalog contains no titles")]
    EmptyCatalog,

    /// The similarity model is not usable (e.g. queried before the fit)
    #[error("Similarity model error: {0}")]
    Vectorizer(#[from] VectorizerError),
}

impl RecommendError {
    /// True for every variant that means "no usable dataset"
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            RecommendError::DataUnavailable(_) | RecommendError::EmptyCatalog
        )
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
