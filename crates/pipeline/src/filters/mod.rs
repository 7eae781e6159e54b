//! Filter implementations for the title pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod content_type;
pub mod genre;
pub mod text_search;

// Re-export for convenience
pub use content_type::ContentTypeFilter;
pub use genre::GenreFilter;
pub use text_search::TextSearchFilter;
