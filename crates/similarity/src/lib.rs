//! # Similarity Crate
//!
//! Text similarity primitives for content-based recommendation.
//!
//! ## Components
//!
//! ### Tokenizer
//! Lowercases, splits on whitespace and punctuation, drops short tokens and
//! English stop words, and expands to n-grams.
//!
//! ### TF-IDF Vectorizer
//! Learns a fixed vocabulary and IDF weights from a corpus once, then maps
//! the corpus and any later free text onto L2-normalized sparse vectors.
//!
//! ### Similarity Ranker
//! Scores matrix rows against a query vector with cosine similarity and
//! returns the top N, excluding the query row when asked.
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::{SimilarityRanker, TfidfVectorizer, VectorizerConfig};
//!
//! let mut vectorizer = TfidfVectorizer::new(VectorizerConfig::default());
//! let matrix = vectorizer.fit_transform(&documents)?;
//!
//! // Rows most similar to document 0
//! let query = matrix.row(0).unwrap();
//! let top = SimilarityRanker::new(&matrix).excluding(0).top_n(query, 10);
//!
//! // Rows most similar to free text
//! let query = vectorizer.transform("dark sci-fi thriller")?;
//! let top = SimilarityRanker::new(&matrix).with_score_above(0.0).top_n(&query, 10);
//! ```

// Public modules
pub mod error;
pub mod stop_words;
pub mod tokenizer;
pub mod sparse;
pub mod vectorizer;
pub mod ranker;

// Re-export commonly used types
pub use error::{Result, VectorizerError};
pub use ranker::{ScoredRow, SimilarityRanker};
pub use sparse::{SparseVector, TfidfMatrix, cosine_similarity};
pub use stop_words::StopWords;
pub use tokenizer::Tokenizer;
pub use vectorizer::{TfidfVectorizer, VectorizerConfig};
