//! Cosine-similarity ranking over a fitted TF-IDF matrix.
//!
//! ## Algorithm
//! 1. Score every candidate row: `dot(q, r) / (|q| * |r|)`, 0.0 for zero vectors
//! 2. Drop the excluded row (the query title itself in content-based mode)
//! 3. Drop rows at or below the score floor, if one is set
//! 4. Sort by score descending, ties by row index ascending
//! 5. Keep the first `n`; fewer candidates than `n` is not an error

use crate::sparse::{SparseVector, TfidfMatrix, cosine_similarity};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// A matrix row and its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRow {
    pub row: usize,
    pub score: f32,
}

/// Ranks matrix rows against a query vector
///
/// ## Usage
/// ```ignore
/// let top = SimilarityRanker::new(&matrix)
///     .excluding(query_row)
///     .top_n(&query, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker<'a> {
    matrix: &'a TfidfMatrix,
    exclude: Option<usize>,
    candidates: Option<&'a [usize]>,
    score_floor: Option<f32>,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(matrix: &'a TfidfMatrix) -> Self {
        Self {
            matrix,
            exclude: None,
            candidates: None,
            score_floor: None,
        }
    }

    /// Never return `row`
    pub fn excluding(mut self, row: usize) -> Self {
        self.exclude = Some(row);
        self
    }

    /// Only score these rows (out-of-range rows are skipped)
    pub fn restricted_to(mut self, rows: &'a [usize]) -> Self {
        self.candidates = Some(rows);
        self
    }

    /// Only return rows scoring strictly above `floor`
    pub fn with_score_above(mut self, floor: f32) -> Self {
        self.score_floor = Some(floor);
        self
    }

    /// Best `n` rows for `query`, highest similarity first
    #[instrument(skip(self, query), fields(query_nnz = query.nnz()))]
    pub fn top_n(&self, query: &SparseVector, n: usize) -> Vec<ScoredRow> {
        if n == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredRow> = match self.candidates {
            Some(rows) => rows
                .par_iter()
                .filter_map(|&row| self.score_row(query, row))
                .collect(),
            None => (0..self.matrix.rows.len())
                .into_par_iter()
                .filter_map(|row| self.score_row(query, row))
                .collect(),
        };

        if let Some(floor) = self.score_floor {
            scored.retain(|s| s.score > floor);
        }

        scored.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.row.cmp(&b.row)));
        scored.dedup_by_key(|s| s.row);
        scored.truncate(n);

        debug!("Ranked {} rows", scored.len());
        scored
    }

    fn score_row(&self, query: &SparseVector, row: usize) -> Option<ScoredRow> {
        if self.exclude == Some(row) {
            return None;
        }
        let vector = self.matrix.rows.get(row)?;
        Some(ScoredRow {
            row,
            score: cosine_similarity(query, vector),
        })
    }
}
