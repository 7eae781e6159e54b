//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Filters combine
//! with logical AND.

use crate::traits::Filter;
use catalog::{Catalog, Position, Title};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Comedies"))
///     .add_filter(ContentTypeFilter::new(ContentType::Movie));
///
/// let hits = pipeline.apply_all(&catalog);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when one is given
    pub fn add_optional_filter(self, filter: Option<impl Filter + 'static>) -> Self {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single title passes every filter
    pub fn matches(&self, title: &Title) -> bool {
        self.filters.iter().all(|filter| filter.matches(title))
    }

    /// Apply all filters in sequence to the candidates, preserving order.
    pub fn apply(&self, candidates: Vec<Position>, catalog: &Catalog) -> Vec<Position> {
        let mut current = candidates;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, catalog);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Apply all filters to the whole catalog, in catalog order
    pub fn apply_all(&self, catalog: &Catalog) -> Vec<Position> {
        self.apply((0..catalog.len()).collect(), catalog)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
