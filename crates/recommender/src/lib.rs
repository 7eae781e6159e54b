//! Recommender crate for the FlixRecs engine.
//!
//! This crate ties the catalog, the feature/filter pipeline and the TF-IDF
//! similarity model together behind one immutable `CatalogIndex`.
//!
//! ```ignore
//! use recommender::{CatalogIndex, IndexConfig};
//!
//! let index = CatalogIndex::load(Path::new("netflix_titles.csv"), IndexConfig::default())?;
//!
//! for rec in index.recommend_by_title("Stranger Things", 5) {
//!     println!("{} ({:.3})", rec.title.title, rec.score);
//! }
//! ```

pub mod catalog_index;
pub mod config;
pub mod error;

pub use catalog_index::{CatalogIndex, Recommendation};
pub use config::IndexConfig;
pub use error::{RecommendError, Result};

// Re-exported so callers need only this crate
pub use catalog::{CatalogStats, ContentType, Title};
