//! Pipeline for feature composition and filtering of catalog titles.
//!
//! This crate provides:
//! - FeatureComposer for building the combined-feature text of each title
//! - Filter trait and implementations (genre, content type, free-text search)
//! - FilterPipeline for composing filters with logical AND
//!
//! ## Architecture
//! 1. FeatureComposer turns every title into one text blob for the vectorizer
//! 2. Filters narrow a list of catalog positions, preserving order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FeatureComposer, FilterPipeline};
//! use pipeline::filters::*;
//!
//! let documents = FeatureComposer::new().compose_all(&catalog);
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new("Comedies"))
//!     .add_filter(ContentTypeFilter::new(ContentType::Movie));
//! let positions = pipeline.apply_all(&catalog);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod features;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use features::{FeatureComposer, compose_features};
