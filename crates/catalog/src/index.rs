//! Catalog building.
//!
//! Parsing produces a flat `Vec<Title>`; this module turns it into a
//! `Catalog` with its identifier, title, genre and year indices. The load
//! is all-or-nothing: any error discards everything parsed so far.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::io::Read;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a CSV file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Read and parse the file into titles
    /// 2. Insert titles in file order, building every index
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading title catalog from {:?}", path);

        let titles = parser::parse_titles_file(path)?;
        let catalog = Self::from_titles(titles)?;

        let (total, movies, shows) = catalog.counts();
        info!(
            "Loaded {} titles ({} movies, {} TV shows)",
            total, movies, shows
        );
        Ok(catalog)
    }

    /// Load the catalog from an in-memory or streamed CSV source
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        let titles = parser::parse_titles(reader)?;
        Self::from_titles(titles)
    }

    /// Build a catalog from already-constructed titles, in the given order
    pub fn from_titles(titles: impl IntoIterator<Item = Title>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for title in titles {
            catalog.insert_title(title)?;
        }
        Ok(catalog)
    }
}
