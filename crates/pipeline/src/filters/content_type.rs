//! Filter to keep only movies or only TV shows.

use crate::traits::Filter;
use catalog::{ContentType, Title};

/// Keeps titles of one content type. Titles with an unknown type never pass.
pub struct ContentTypeFilter {
    content_type: ContentType,
}

impl ContentTypeFilter {
    pub fn new(content_type: ContentType) -> Self {
        Self { content_type }
    }
}

impl Filter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        title.is_content_type(self.content_type)
    }
}
