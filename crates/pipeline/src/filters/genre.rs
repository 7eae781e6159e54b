//! Filter to keep only titles listed under a genre.

use crate::traits::Filter;
use catalog::{Catalog, Position, Title};

/// Keeps titles whose genre list contains `genre`.
///
/// ## Algorithm
/// Exact match against each genre entry, ignoring case and surrounding
/// whitespace. "Comedy" does not match "Comedies" or "TV Comedies".
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, title: &Title) -> bool {
        title.has_genre(&self.genre)
    }

    /// Uses the catalog's genre index instead of scanning every title
    fn apply(&self, candidates: Vec<Position>, catalog: &Catalog) -> Vec<Position> {
        let listed = catalog.positions_by_genre(&self.genre);
        candidates
            .into_iter()
            .filter(|pos| listed.binary_search(pos).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        let titles = vec![
            Title {
                genres: vec!["Comedies".into(), "Dramas".into()],
                ..Title::new("s1", "Both")
            },
            Title {
                genres: vec!["Dramas".into()],
                ..Title::new("s2", "Drama Only")
            },
            Title {
                genres: vec!["TV Comedies".into()],
                ..Title::new("s3", "Show Comedy")
            },
        ];
        Catalog::from_titles(titles).unwrap()
    }

    #[test]
    fn test_genre_filter() {
        let catalog = create_test_catalog();
        let filter = GenreFilter::new("comedies");

        let filtered = filter.apply(vec![0, 1, 2], &catalog);
        assert_eq!(filtered, vec![0]);
    }

    #[test]
    fn test_index_and_scan_agree() {
        let catalog = create_test_catalog();
        let filter = GenreFilter::new(" DRAMAS ");

        let indexed = filter.apply(vec![2, 1, 0], &catalog);
        let scanned: Vec<Position> = vec![2, 1, 0]
            .into_iter()
            .filter(|&pos| filter.matches(catalog.get(pos).unwrap()))
            .collect();

        assert_eq!(indexed, vec![1, 0]);
        assert_eq!(indexed, scanned);
    }
}
