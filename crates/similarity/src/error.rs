//! Error types for the similarity crate.

use thiserror::Error;

/// Errors raised by the TF-IDF vectorizer's fit/transform lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizerError {
    /// `transform` was called before `fit`
    #[error("Vectorizer has not been fit; call fit() on the corpus first")]
    NotFit,

    /// `fit` was called a second time; the vocabulary is fixed once learned
    #[error("Vectorizer is already fit; build a new vectorizer to refit")]
    AlreadyFit,

    /// `fit` was given no documents
    #[error("Cannot fit a vectorizer on an empty corpus")]
    EmptyCorpus,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, VectorizerError>;
