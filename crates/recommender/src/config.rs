//! Index configuration.

use similarity::VectorizerConfig;

/// Tunables applied once, when the index is built
#[derive(Debug, Clone, Default)]
pub struct IndexConfig {
    pub vectorizer: VectorizerConfig,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the TF-IDF vocabulary (default: 5000); `None` keeps every term
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.vectorizer = self.vectorizer.with_max_features(max_features);
        self
    }

    /// Inclusive n-gram range for the vectorizer (default: 1..=2)
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.vectorizer = self.vectorizer.with_ngram_range(min_n, max_n);
        self
    }

    pub fn with_vectorizer(mut self, vectorizer: VectorizerConfig) -> Self {
        self.vectorizer = vectorizer;
        self
    }
}
