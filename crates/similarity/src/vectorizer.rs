//! TF-IDF vectorizer.
//!
//! ## Lifecycle
//! A `TfidfVectorizer` starts *unfit*. `fit` learns the vocabulary and IDF
//! weights from the corpus exactly once; afterwards `transform` maps any text
//! onto that fixed vocabulary. Calling `transform` before `fit` returns
//! `NotFit`, fitting twice returns `AlreadyFit`.
//!
//! ## Weighting
//! - term frequency: raw count of the term in the document
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1` (smoothed, never zero)
//! - every row is L2-normalized, so cosine similarity reduces to a dot product
//!
//! ## Vocabulary
//! Terms below `min_df` documents are dropped; if `max_features` is set the
//! terms with the highest corpus frequency are kept (ties: lexicographic).
//! Columns are numbered in lexicographic term order.

use crate::error::{Result, VectorizerError};
use crate::sparse::{SparseVector, TfidfMatrix};
use crate::stop_words::StopWords;
use crate::tokenizer::Tokenizer;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Tunables for the vectorizer
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    /// Inclusive n-gram range (default: unigrams and bigrams)
    pub ngram_range: (usize, usize),
    /// Vocabulary cap (default: 5000 terms)
    pub max_features: Option<usize>,
    /// Minimum number of documents a term must appear in (default: 1)
    pub min_df: usize,
    /// Minimum token length in characters (default: 2)
    pub min_token_len: usize,
    pub stop_words: StopWords,
}

impl VectorizerConfig {
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    /// `None` keeps every term
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    pub fn with_min_token_len(mut self, min: usize) -> Self {
        self.min_token_len = min.max(1);
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 2),
            max_features: Some(5000),
            min_df: 1,
            min_token_len: 2,
            stop_words: StopWords::English,
        }
    }
}

/// Vocabulary and IDF weights learned by `fit`
#[derive(Debug, Clone)]
struct FittedModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

/// Learns a term vocabulary from a corpus and maps text to TF-IDF vectors
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    tokenizer: Tokenizer,
    model: Option<FittedModel>,
}

impl TfidfVectorizer {
    /// Create an unfit vectorizer
    pub fn new(config: VectorizerConfig) -> Self {
        let tokenizer = Tokenizer::new()
            .with_stop_words(config.stop_words.clone())
            .with_min_token_len(config.min_token_len);
        Self {
            config,
            tokenizer,
            model: None,
        }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    pub fn is_fit(&self) -> bool {
        self.model.is_some()
    }

    /// Number of columns; 0 while unfit
    pub fn vocabulary_size(&self) -> usize {
        self.model.as_ref().map(|m| m.vocabulary.len()).unwrap_or(0)
    }

    /// Column index of `term`, if it made it into the vocabulary
    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.model.as_ref()?.vocabulary.get(term).copied()
    }

    /// Learn vocabulary and IDF weights from `documents`
    pub fn fit<S: AsRef<str> + Sync>(&mut self, documents: &[S]) -> Result<()> {
        if self.model.is_some() {
            return Err(VectorizerError::AlreadyFit);
        }
        if documents.is_empty() {
            return Err(VectorizerError::EmptyCorpus);
        }

        let n_docs = documents.len();

        // Per-document term counts, in parallel
        let doc_counts: Vec<HashMap<String, u32>> = documents
            .par_iter()
            .map(|doc| self.count_terms(doc.as_ref()))
            .collect();

        // Corpus-wide term frequency and document frequency
        let mut term_freq: HashMap<&str, u64> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *term_freq.entry(term.as_str()).or_insert(0) += count as u64;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        debug!("Counted {} distinct terms over {} documents", doc_freq.len(), n_docs);

        let mut kept: Vec<(&str, u64)> = term_freq
            .into_iter()
            .filter(|(term, _)| doc_freq.get(term).copied().unwrap_or(0) >= self.config.min_df)
            .collect();

        if let Some(max_features) = self.config.max_features {
            if kept.len() > max_features {
                kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                kept.truncate(max_features);
            }
        }

        let mut terms: Vec<&str> = kept.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        if terms.is_empty() {
            warn!("Fitted an empty vocabulary; every vector will be zero");
        }

        let n = n_docs as f32;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        info!(
            "Fitted TF-IDF vocabulary: {} terms from {} documents",
            vocabulary.len(),
            n_docs
        );
        self.model = Some(FittedModel { vocabulary, idf });
        Ok(())
    }

    /// Map `text` onto the fitted vocabulary.
    ///
    /// Unknown terms are ignored; empty or all-stop-word text gives the zero
    /// vector.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let model = self.model.as_ref().ok_or(VectorizerError::NotFit)?;
        Ok(Self::weigh(model, self.count_terms(text)))
    }

    /// Transform every document, in parallel, preserving order
    pub fn transform_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<TfidfMatrix> {
        let model = self.model.as_ref().ok_or(VectorizerError::NotFit)?;
        let rows: Vec<SparseVector> = documents
            .par_iter()
            .map(|doc| Self::weigh(model, self.count_terms(doc.as_ref())))
            .collect();
        Ok(TfidfMatrix::new(rows, model.vocabulary.len()))
    }

    /// `fit` followed by `transform_all` on the same corpus
    pub fn fit_transform<S: AsRef<str> + Sync>(&mut self, documents: &[S]) -> Result<TfidfMatrix> {
        self.fit(documents)?;
        self.transform_all(documents)
    }

    fn count_terms(&self, text: &str) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for term in self.tokenizer.terms(text, self.config.ngram_range) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }

    fn weigh(model: &FittedModel, counts: HashMap<String, u32>) -> SparseVector {
        let entries: Vec<(usize, f32)> = counts
            .into_iter()
            .filter_map(|(term, count)| {
                let column = *model.vocabulary.get(&term)?;
                Some((column, count as f32 * model.idf[column]))
            })
            .collect();

        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(VectorizerConfig::default())
    }
}
