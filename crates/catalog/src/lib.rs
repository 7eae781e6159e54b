//! # Catalog Crate
//!
//! This crate loads a movie/TV-show titles dataset (CSV) into an in-memory,
//! read-only `Catalog`.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Title, ContentType, Catalog, CatalogStats)
//! - **parser**: Parse CSV rows into `Title` records with explicit defaults
//! - **index**: Build the catalog and its lookup indices
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("netflix_titles.csv"))?;
//!
//! let title = catalog.find_by_title("stranger things").unwrap();
//! let dramas = catalog.positions_by_genre("Dramas");
//!
//! println!("{} is one of {} dramas", title.title, dramas.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    TitleId,
    Position,
    // Core types
    Title,
    Catalog,
    CatalogStats,
    // Enums
    ContentType,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, name: &str, genres: &[&str], year: u16) -> Title {
        Title {
            content_type: Some(ContentType::Movie),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            release_year: Some(year),
            ..Title::new(id, name)
        }
    }

    #[test]
    fn test_catalog_creation() {
        // Test that we can create an empty Catalog
        let catalog = Catalog::new();
        let (total, movies, shows) = catalog.counts();

        assert_eq!(total, 0);
        assert_eq!(movies, 0);
        assert_eq!(shows, 0);
        assert!(catalog.is_empty());
        assert_eq!(catalog.stats().release_year_range, None);
    }

    #[test]
    fn test_insert_title() {
        let mut catalog = Catalog::new();

        let position = catalog
            .insert_title(movie("s1", "Toy Story", &["Children & Family Movies", "Comedies"], 1995))
            .unwrap();

        assert_eq!(position, 0);
        let retrieved = catalog.get_by_id("s1").unwrap();
        assert_eq!(retrieved.title, "Toy Story");
        assert_eq!(retrieved.genres.len(), 2);
        assert_eq!(catalog.positions_by_genre("COMEDIES"), &[0]);
    }

    #[test]
    fn test_repeated_genre_indexed_once() {
        let mut catalog = Catalog::new();
        catalog
            .insert_title(movie("s1", "Twice", &["Dramas", "dramas"], 2000))
            .unwrap();

        assert_eq!(catalog.positions_by_genre("Dramas"), &[0]);
    }

    #[test]
    fn test_has_genre_is_exact() {
        let title = movie("s1", "Funny", &["Comedies", "Stand-Up Comedy"], 2010);

        assert!(title.has_genre("comedies"));
        assert!(title.has_genre(" Stand-Up Comedy "));
        assert!(!title.has_genre("Comedy"));
    }

    #[test]
    fn test_padded_genre_indexed_trimmed() {
        let mut catalog = Catalog::new();
        catalog
            .insert_title(movie("s1", "Funny", &[" Comedies ", "Dramas"], 2010))
            .unwrap();

        assert!(catalog.titles()[0].has_genre("comedies"));
        assert_eq!(catalog.positions_by_genre("Comedies"), &[0]);
        assert_eq!(catalog.genres(), vec!["Comedies", "Dramas"]);
        assert_eq!(catalog.stats().unique_genres, 2);
    }

    #[test]
    fn test_content_type_parsing() {
        assert_eq!("Movie".parse::<ContentType>(), Ok(ContentType::Movie));
        assert_eq!("TV Show".parse::<ContentType>(), Ok(ContentType::Show));
        assert_eq!("show".parse::<ContentType>(), Ok(ContentType::Show));
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        // Querying non-existent data should return None or empty slices
        assert!(catalog.get(0).is_none());
        assert!(catalog.get_by_id("s999").is_none());
        assert!(catalog.find_by_title("Nothing").is_none());
        assert!(catalog.positions_by_genre("Dramas").is_empty());
        assert!(catalog.positions_by_year(1999).is_empty());
    }
}
