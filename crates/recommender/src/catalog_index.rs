//! # Catalog Index
//!
//! The fitted, read-only recommendation index. Built once at startup:
//! 1. Load (or receive) the catalog
//! 2. Compose the combined-feature string of every title
//! 3. Fit the TF-IDF vectorizer on those strings and keep the matrix
//!
//! After `build` returns nothing is mutated again, so a `CatalogIndex` can
//! be shared by reference (or in an `Arc`) across any number of queries.
//!
//! ## Queries
//! - `recommend_by_title`: titles most similar to a catalog title
//! - `recommend_by_description`: titles most similar to free text
//! - `recommend_by_genre`: newest titles in a genre
//! - `search`: substring search over title, description, cast and director
//! - `popular_titles`: newest titles overall
//! - `stats`: dataset summary

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument};

use catalog::{Catalog, CatalogStats, ContentType, Position, Title};
use pipeline::filters::{ContentTypeFilter, GenreFilter, TextSearchFilter};
use pipeline::{FeatureComposer, Filter, FilterPipeline};
use similarity::{ScoredRow, SimilarityRanker, TfidfMatrix, TfidfVectorizer};

use crate::config::IndexConfig;
use crate::error::{RecommendError, Result};

/// A ranked title together with its similarity to the query
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub position: Position,
    pub score: f32,
    pub title: &'a Title,
}

/// Immutable catalog + fitted TF-IDF model
#[derive(Debug)]
pub struct CatalogIndex {
    catalog: Catalog,
    vectorizer: TfidfVectorizer,
    /// One row per title, same order as the catalog
    matrix: TfidfMatrix,
}

impl CatalogIndex {
    /// Load the dataset at `path` and build the index
    pub fn load(path: &Path, config: IndexConfig) -> Result<Self> {
        let catalog = Catalog::load_from_file(path)?;
        Self::build(catalog, config)
    }

    /// Fit the similarity model over `catalog`.
    ///
    /// This is the only place the vectorizer is fit.
    pub fn build(catalog: Catalog, config: IndexConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let start = Instant::now();
        let documents = FeatureComposer::new().compose_all(&catalog);

        let mut vectorizer = TfidfVectorizer::new(config.vectorizer);
        let matrix = vectorizer.fit_transform(&documents)?;

        let (rows, columns) = matrix.shape();
        info!(
            "Built TF-IDF matrix {}x{} ({} non-zeros) in {:.2?}",
            rows,
            columns,
            matrix.nnz(),
            start.elapsed()
        );

        Ok(Self {
            catalog,
            vectorizer,
            matrix,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    /// Resolve a user-typed title to one catalog position.
    ///
    /// Exact case-insensitive match first; otherwise the first title (in
    /// catalog order) containing the query. Blank queries resolve to nothing.
    pub fn resolve_title(&self, title: &str) -> Option<Position> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.catalog.position_of_title(&needle).or_else(|| {
            self.catalog
                .titles()
                .iter()
                .position(|t| t.title.to_lowercase().contains(&needle))
        })
    }

    /// Titles most similar to `title`, never including it.
    ///
    /// Unknown titles give an empty list. Otherwise the result has
    /// `min(n, catalog.len() - 1)` entries.
    #[instrument(skip(self))]
    pub fn recommend_by_title(&self, title: &str, n: usize) -> Vec<Recommendation<'_>> {
        let Some(position) = self.resolve_title(title) else {
            debug!("No catalog title matches '{}'", title);
            return Vec::new();
        };
        let Some(query) = self.matrix.row(position) else {
            return Vec::new();
        };

        let scored = SimilarityRanker::new(&self.matrix)
            .excluding(position)
            .top_n(query, n);
        self.to_recommendations(scored)
    }

    /// Titles most similar to a free-text description.
    ///
    /// Only titles with a positive similarity are returned, so text made
    /// entirely of stop words or unknown terms yields an empty list.
    #[instrument(skip(self))]
    pub fn recommend_by_description(
        &self,
        text: &str,
        content_type: Option<ContentType>,
        n: usize,
    ) -> Result<Vec<Recommendation<'_>>> {
        let query = self.vectorizer.transform(text)?;
        if query.is_zero() {
            debug!("Description has no known terms");
            return Ok(Vec::new());
        }

        let ranker = SimilarityRanker::new(&self.matrix).with_score_above(0.0);
        let scored = match content_type {
            Some(content_type) => {
                let candidates = ContentTypeFilter::new(content_type)
                    .apply((0..self.catalog.len()).collect(), &self.catalog);
                ranker.restricted_to(&candidates).top_n(&query, n)
            }
            None => ranker.top_n(&query, n),
        };

        Ok(self.to_recommendations(scored))
    }

    /// Titles listed under `genre` (exact, case-insensitive), newest first.
    ///
    /// Titles without a release year come last; ties keep catalog order.
    #[instrument(skip(self))]
    pub fn recommend_by_genre(
        &self,
        genre: &str,
        content_type: Option<ContentType>,
        n: usize,
    ) -> Vec<&Title> {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(genre))
            .add_optional_filter(content_type.map(ContentTypeFilter::new));

        let candidates = self.catalog.positions_by_genre(genre).to_vec();
        let positions = pipeline.apply(candidates, &self.catalog);
        self.newest_first(positions, n)
    }

    /// Newest titles overall, optionally of one content type
    #[instrument(skip(self))]
    pub fn popular_titles(&self, content_type: Option<ContentType>, n: usize) -> Vec<&Title> {
        let pipeline =
            FilterPipeline::new().add_optional_filter(content_type.map(ContentTypeFilter::new));
        let positions = pipeline.apply_all(&self.catalog);
        self.newest_first(positions, n)
    }

    /// Titles whose title, description, cast or director contains `query`
    /// (case-insensitive), in catalog order. A blank query matches nothing.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str, n: usize) -> Vec<&Title> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let filter = TextSearchFilter::new(query);
        let hits: Vec<&Title> = self
            .catalog
            .titles()
            .iter()
            .filter(|title| filter.matches(title))
            .take(n)
            .collect();

        debug!("Search '{}' matched {} titles", query, hits.len());
        hits
    }

    fn newest_first(&self, mut positions: Vec<Position>, n: usize) -> Vec<&Title> {
        // Stable sort: equal years keep catalog order
        positions.sort_by_key(|&pos| {
            let year = self.catalog.get(pos).and_then(|t| t.release_year);
            std::cmp::Reverse(year)
        });
        positions
            .into_iter()
            .take(n)
            .filter_map(|pos| self.catalog.get(pos))
            .collect()
    }

    fn to_recommendations(&self, scored: Vec<ScoredRow>) -> Vec<Recommendation<'_>> {
        scored
            .into_iter()
            .filter_map(|s| {
                let title = self.catalog.get(s.row)?;
                Some(Recommendation {
                    position: s.row,
                    score: s.score,
                    title,
                })
            })
            .collect()
    }
}
