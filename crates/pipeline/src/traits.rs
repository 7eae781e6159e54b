//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to sets of catalog positions.

use catalog::{Catalog, Position, Title};

/// Core trait for filtering titles.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with a read-only index
/// - Filters work on catalog positions, so candidate lists stay cheap to move
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single title passes this filter
    fn matches(&self, title: &Title) -> bool;

    /// Apply this filter to a set of candidate positions.
    ///
    /// Order is preserved. Positions that do not exist in the catalog are
    /// dropped.
    fn apply(&self, candidates: Vec<Position>, catalog: &Catalog) -> Vec<Position> {
        candidates
            .into_iter()
            .filter(|&pos| catalog.get(pos).is_some_and(|title| self.matches(title)))
            .collect()
    }
}
