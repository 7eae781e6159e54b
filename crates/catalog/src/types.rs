//! Core domain types for the title catalog.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Title`: one movie or TV show, immutable after load
//! - `ContentType`: the movie/show split
//! - `Catalog`: the ordered in-memory table plus its lookup indices
//! - `CatalogStats`: summary numbers for the `stats` query

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{DataLoadError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a title (`show_id` in the dataset, e.g. "s42")
pub type TitleId = String;

/// Position of a title in catalog order. Rows of the similarity matrix use
/// the same numbering.
pub type Position = usize;

// =============================================================================
// Content Type
// =============================================================================

/// Whether a title is a movie or a TV show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Show,
}

impl ContentType {
    /// Label used by the dataset ("Movie" / "TV Show")
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::Show => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentType {
    type Err = String;

    /// Accepts the dataset labels and the short forms users type.
    ///
    /// Example: "TV Show" -> Ok(ContentType::Show)
    ///          "movie"   -> Ok(ContentType::Movie)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(ContentType::Movie),
            "tv show" | "tv shows" | "show" | "shows" | "tv" | "tv-show" => Ok(ContentType::Show),
            other => Err(format!("unknown content type '{}'", other)),
        }
    }
}

// =============================================================================
// Title
// =============================================================================

/// One catalog entry.
///
/// Every text field defaults to an empty string and every list to an empty
/// `Vec` when the dataset has no value for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: TitleId,
    pub title: String,
    /// `None` when the dataset's `type` cell is empty or unrecognised
    pub content_type: Option<ContentType>,
    /// Genres in dataset order ("listed_in", comma separated in the file)
    pub genres: Vec<String>,
    pub description: String,
    /// Cast members in billing order
    pub cast: Vec<String>,
    pub director: String,
    pub release_year: Option<u16>,
    /// Maturity rating such as "TV-MA" or "PG-13"
    pub rating: String,
    pub country: String,
    /// "90 min" for movies, "2 Seasons" for shows
    pub duration: String,
    pub date_added: String,
}

impl Title {
    /// Create a title with only an id and a name; every other field is empty.
    ///
    /// Mostly useful for tests and fixtures, combined with struct update syntax.
    pub fn new(id: impl Into<TitleId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content_type: None,
            genres: Vec::new(),
            description: String::new(),
            cast: Vec::new(),
            director: String::new(),
            release_year: None,
            rating: String::new(),
            country: String::new(),
            duration: String::new(),
            date_added: String::new(),
        }
    }

    /// Exact, case-insensitive genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.trim().to_lowercase();
        self.genres.iter().any(|g| g.trim().to_lowercase() == wanted)
    }

    pub fn is_content_type(&self, content_type: ContentType) -> bool {
        self.content_type == Some(content_type)
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Dataset summary, computed on demand from the catalog indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_titles: usize,
    pub movies: usize,
    pub tv_shows: usize,
    pub unique_genres: usize,
    /// `(oldest, newest)` release year, `None` if no title has a year
    pub release_year_range: Option<(u16, u16)>,
}

// =============================================================================
// Catalog - The In-Memory Table
// =============================================================================

/// Ordered collection of titles plus lookup indices.
///
/// Titles are stored in dataset order and never reordered; every index
/// stores positions into `titles`. Once loaded the catalog is only read.
#[derive(Debug)]
pub struct Catalog {
    // Primary data store, dataset order
    pub(crate) titles: Vec<Title>,

    /// Identifier -> position (identifiers are unique)
    pub(crate) id_index: HashMap<TitleId, Position>,
    /// Lowercased title -> position of the *first* title with that name
    pub(crate) title_index: HashMap<String, Position>,

    // Secondary indices for filtered queries
    /// Lowercased genre -> positions, ascending
    pub(crate) genre_index: HashMap<String, Vec<Position>>,
    /// Release year -> positions, ascending within each year
    pub(crate) year_index: BTreeMap<u16, Vec<Position>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            titles: Vec::new(),
            id_index: HashMap::new(),
            title_index: HashMap::new(),
            genre_index: HashMap::new(),
            year_index: BTreeMap::new(),
        }
    }

    /// Append a title and update every index.
    ///
    /// Duplicate *names* are allowed (the first one keeps the title lookup);
    /// duplicate *identifiers* are rejected.
    pub fn insert_title(&mut self, title: Title) -> Result<Position> {
        let position = self.titles.len();
        if self.id_index.contains_key(&title.id) {
            return Err(DataLoadError::DuplicateId {
                id: title.id.clone(),
                row: position + 1,
            });
        }

        self.id_index.insert(title.id.clone(), position);
        self.title_index
            .entry(title.title.trim().to_lowercase())
            .or_insert(position);

        for genre in &title.genres {
            let positions = self.genre_index.entry(genre.trim().to_lowercase()).or_default();
            // A genre listed twice on one title still indexes it once
            if positions.last() != Some(&position) {
                positions.push(position);
            }
        }

        if let Some(year) = title.release_year {
            self.year_index.entry(year).or_default().push(position);
        }

        self.titles.push(title);
        Ok(position)
    }

    /// All titles in catalog order
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Get a title by catalog position
    pub fn get(&self, position: Position) -> Option<&Title> {
        self.titles.get(position)
    }

    /// Get a title by its identifier
    pub fn get_by_id(&self, id: &str) -> Option<&Title> {
        self.id_index.get(id).map(|&pos| &self.titles[pos])
    }

    /// Case-insensitive exact title lookup; first match in catalog order wins.
    pub fn position_of_title(&self, title: &str) -> Option<Position> {
        self.title_index.get(&title.trim().to_lowercase()).copied()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Title> {
        self.position_of_title(title).map(|pos| &self.titles[pos])
    }

    /// Positions of every title listing `genre` (exact, case-insensitive)
    pub fn positions_by_genre(&self, genre: &str) -> &[Position] {
        self.genre_index
            .get(&genre.trim().to_lowercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Positions of every title released in `year`
    pub fn positions_by_year(&self, year: u16) -> &[Position] {
        self.year_index
            .get(&year)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct genre names as written in the dataset, sorted
    ///
    /// Genres differing only in case collapse to the first spelling seen.
    pub fn genres(&self) -> Vec<&str> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for title in &self.titles {
            for genre in &title.genres {
                let genre = genre.trim();
                seen.entry(genre.to_lowercase()).or_insert(genre);
            }
        }
        let sorted: BTreeSet<&str> = seen.into_values().collect();
        sorted.into_iter().collect()
    }

    /// `(total, movies, shows)` for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize) {
        let movies = self
            .titles
            .iter()
            .filter(|t| t.is_content_type(ContentType::Movie))
            .count();
        let shows = self
            .titles
            .iter()
            .filter(|t| t.is_content_type(ContentType::Show))
            .count();
        (self.titles.len(), movies, shows)
    }

    pub fn stats(&self) -> CatalogStats {
        let (total_titles, movies, tv_shows) = self.counts();
        let oldest = self.year_index.keys().next().copied();
        let newest = self.year_index.keys().next_back().copied();

        CatalogStats {
            total_titles,
            movies,
            tv_shows,
            unique_genres: self.genre_index.len(),
            release_year_range: oldest.zip(newest),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
