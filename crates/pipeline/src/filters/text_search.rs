//! Free-text search across a title's descriptive fields.

use crate::traits::Filter;
use catalog::Title;

/// Keeps titles where `query` appears, case-insensitively, in the title,
/// description, cast or director. A hit in any one field is enough.
///
/// The cast is searched as the dataset writes it ("Name One, Name Two").
pub struct TextSearchFilter {
    needle: String,
}

impl TextSearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.needle
    }
}

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(&self.needle);

        contains(&title.title)
            || contains(&title.description)
            || contains(&title.cast.join(", "))
            || contains(&title.director)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> Title {
        Title {
            description: "A con artist plans one last job.".into(),
            cast: vec!["Leonardo DiCaprio".into(), "Tom Hardy".into()],
            director: "Christopher Nolan".into(),
            ..Title::new("s1", "Inception")
        }
    }

    #[test]
    fn test_matches_each_field() {
        let t = title();

        assert!(TextSearchFilter::new("incep").matches(&t));
        assert!(TextSearchFilter::new("LAST JOB").matches(&t));
        assert!(TextSearchFilter::new("dicaprio").matches(&t));
        assert!(TextSearchFilter::new("nolan").matches(&t));
        assert!(!TextSearchFilter::new("spielberg").matches(&t));
    }

    #[test]
    fn test_cast_searched_as_written() {
        let t = title();
        assert!(TextSearchFilter::new("DiCaprio, Tom").matches(&t));
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(TextSearchFilter::new("  Hardy ").query(), "hardy");
        assert!(TextSearchFilter::new("  Hardy ").matches(&title()));
    }
}
