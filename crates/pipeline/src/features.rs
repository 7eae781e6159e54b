//! Combined-feature composition.
//!
//! Each title is reduced to one text blob that the TF-IDF vectorizer reads:
//!
//! ```text
//! <genres joined by ' '> <description> <cast joined by ' '> <director>
//! ```
//!
//! The four parts are always joined by a single space, even when a part is
//! empty, so the output depends only on the title. Case is left alone; the
//! tokenizer lowercases.

use catalog::{Catalog, Title};
use rayon::prelude::*;

/// Builds combined-feature strings for titles
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureComposer;

impl FeatureComposer {
    pub fn new() -> Self {
        Self
    }

    /// Combined-feature string for one title
    pub fn compose(&self, title: &Title) -> String {
        compose_features(title)
    }

    /// Combined-feature strings for every title, in catalog order.
    ///
    /// Runs in parallel; `collect` keeps the output aligned with positions.
    pub fn compose_all(&self, catalog: &Catalog) -> Vec<String> {
        catalog.titles().par_iter().map(compose_features).collect()
    }
}

/// Combined-feature string for one title
pub fn compose_features(title: &Title) -> String {
    [
        title.genres.join(" "),
        title.description.clone(),
        title.cast.join(" "),
        title.director.clone(),
    ]
    .join(" ")
}
