//! Parser for the titles CSV file.
//!
//! Expected header (the Netflix titles dataset):
//! `show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description`
//!
//! Header names are matched after trimming and lowercasing, so `Title` and
//! ` title ` both name the `title` column. Only `title` is mandatory. Every other column may be missing entirely,
//! and every cell may be empty; those become empty strings, empty lists or
//! `None`. Structural problems (ragged rows, broken quoting, duplicate ids)
//! fail the whole load.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Columns that must be present in the header row
const REQUIRED_COLUMNS: &[&str] = &["title"];

/// One CSV row exactly as the file spells it.
///
/// `Option<String>` everywhere: the csv crate maps empty cells to `None`,
/// and `#[serde(default)]` covers columns absent from the header.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTitleRecord {
    show_id: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    director: Option<String>,
    cast: Option<String>,
    country: Option<String>,
    date_added: Option<String>,
    release_year: Option<String>,
    rating: Option<String>,
    duration: Option<String>,
    listed_in: Option<String>,
    description: Option<String>,
}

/// Read a file as UTF-8, replacing invalid sequences instead of failing.
///
/// Scraped catalog dumps occasionally carry stray Latin-1 bytes in
/// descriptions; one bad byte should not make the dataset unavailable.
fn read_to_string_lossy(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse the titles file at `path`
pub fn parse_titles_file(path: &Path) -> Result<Vec<Title>> {
    let content = read_to_string_lossy(path)?;
    parse_titles(content.as_bytes())
}

/// Parse titles from any CSV source with a header row
pub fn parse_titles<R: Read>(reader: R) -> Result<Vec<Title>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    // Field names in RawTitleRecord are lowercase; serde matches them exactly
    csv_reader.set_headers(headers);

    let raws = csv_reader
        .deserialize::<RawTitleRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // Real ids are known up front so synthetic ones can step around them
    let taken: HashSet<String> = raws
        .iter()
        .filter_map(|raw| raw.show_id.as_deref().map(str::trim))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    let titles = raws
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| into_title(raw, idx + 1, &taken))
        .collect();

    Ok(titles)
}

/// Convert a raw row into a `Title`, applying the defaulting rules
fn into_title(raw: RawTitleRecord, row_no: usize, taken: &HashSet<String>) -> Title {
    let id = non_empty(raw.show_id).unwrap_or_else(|| synthetic_id(row_no, taken));

    let content_type = non_empty(raw.kind).and_then(|kind| match kind.parse::<ContentType>() {
        Ok(content_type) => Some(content_type),
        Err(reason) => {
            warn!(row = row_no, "Ignoring content type: {}", reason);
            None
        }
    });

    let release_year = non_empty(raw.release_year).and_then(|year| match parse_year(&year) {
        Some(year) => Some(year),
        None => {
            warn!(row = row_no, "Ignoring unparsable release year '{}'", year);
            None
        }
    });

    Title {
        id,
        title: raw.title.unwrap_or_default(),
        content_type,
        genres: split_list(raw.listed_in.as_deref()),
        description: raw.description.unwrap_or_default(),
        cast: split_list(raw.cast.as_deref()),
        director: raw.director.unwrap_or_default(),
        release_year,
        rating: raw.rating.unwrap_or_default(),
        country: raw.country.unwrap_or_default(),
        duration: raw.duration.unwrap_or_default(),
        date_added: raw.date_added.unwrap_or_default(),
    }
}

/// Id for a row without `show_id`: `row-<n>` for the 1-based data row,
/// suffixed `-2`, `-3`, ... while a real `show_id` already uses it.
fn synthetic_id(row_no: usize, taken: &HashSet<String>) -> String {
    let base = format!("row-{}", row_no);
    let mut candidate = base.clone();
    let mut suffix = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    candidate
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a release year, tolerating a float rendering such as "2019.0"
///
/// Example: "2019"   -> Some(2019)
///          "2019.0" -> Some(2019)
///          "n/a"    -> None
fn parse_year(s: &str) -> Option<u16> {
    let s = s.trim();
    if let Ok(year) = s.parse::<u16>() {
        return Some(year);
    }
    let (whole, fraction) = s.split_once('.')?;
    if fraction.chars().all(|c| c == '0') {
        whole.parse::<u16>().ok()
    } else {
        None
    }
}

/// Split a comma-separated cell into trimmed, non-empty entries
///
/// Example: "Dramas, International Movies" -> vec!["Dramas", "International Movies"]
fn split_list(s: Option<&str>) -> Vec<String> {
    s.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\n";

    #[test]
    fn test_parse_full_row() {
        let csv = format!(
            "{}s1,Movie,Inception,Christopher Nolan,\"Leonardo DiCaprio, Joseph Gordon-Levitt\",United States,\"September 1, 2021\",2010,PG-13,148 min,\"Action & Adventure, Sci-Fi & Fantasy\",A thief who steals secrets through dreams.\n",
            HEADER
        );
        let titles = parse_titles(csv.as_bytes()).unwrap();

        assert_eq!(titles.len(), 1);
        let t = &titles[0];
        assert_eq!(t.id, "s1");
        assert_eq!(t.content_type, Some(ContentType::Movie));
        assert_eq!(t.cast, vec!["Leonardo DiCaprio", "Joseph Gordon-Levitt"]);
        assert_eq!(t.genres, vec!["Action & Adventure", "Sci-Fi & Fantasy"]);
        assert_eq!(t.release_year, Some(2010));
        assert_eq!(t.date_added, "September 1, 2021");
    }

    #[test]
    fn test_missing_values_default_to_empty() {
        let csv = format!("{}s2,TV Show,Dark,,,,,,,,,\n", HEADER);
        let titles = parse_titles(csv.as_bytes()).unwrap();

        let t = &titles[0];
        assert_eq!(t.content_type, Some(ContentType::Show));
        assert!(t.director.is_empty());
        assert!(t.cast.is_empty());
        assert!(t.genres.is_empty());
        assert!(t.description.is_empty());
        assert_eq!(t.release_year, None);
    }

    #[test]
    fn test_missing_optional_columns() {
        let csv = "title,description\nAlpha,First one\nBeta,\n";
        let titles = parse_titles(csv.as_bytes()).unwrap();

        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].id, "row-1");
        assert_eq!(titles[1].id, "row-2");
        assert_eq!(titles[1].description, "");
        assert_eq!(titles[0].content_type, None);
    }

    #[test]
    fn test_synthetic_id_steps_around_real_ids() {
        let csv = "show_id,title\nrow-2,Alpha\n,Beta\n,Gamma\n";
        let titles = parse_titles(csv.as_bytes()).unwrap();

        assert_eq!(titles[0].id, "row-2");
        assert_eq!(titles[1].id, "row-2-2");
        assert_eq!(titles[2].id, "row-3");

        let catalog = crate::Catalog::from_titles(titles).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_by_id("row-2-2").unwrap().title, "Beta");
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let csv = "Show_Id, Type ,Title,DESCRIPTION\ns1,Movie,Inception,Dreams\n";
        let titles = parse_titles(csv.as_bytes()).unwrap();

        let t = &titles[0];
        assert_eq!(t.id, "s1");
        assert_eq!(t.title, "Inception");
        assert_eq!(t.content_type, Some(ContentType::Movie));
        assert_eq!(t.description, "Dreams");
    }

    #[test]
    fn test_missing_title_column_is_an_error() {
        let csv = "show_id,description\ns1,Something\n";
        let err = parse_titles(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let csv = "show_id,title\ns1,Alpha,extra\n";
        let err = parse_titles(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year("2019.0"), Some(2019));
        assert_eq!(parse_year("2019.5"), None);
        assert_eq!(parse_year("unknown"), None);
    }

    #[test]
    fn test_unknown_content_type_is_none() {
        let csv = "title,type\nAlpha,Podcast\n";
        let titles = parse_titles(csv.as_bytes()).unwrap();
        assert_eq!(titles[0].content_type, None);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_titles_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let path = std::env::temp_dir().join(format!("catalog-lossy-{}.csv", std::process::id()));
        std::fs::write(&path, b"show_id,title,description\ns1,Caf\xe9,Bad \xff byte\n").unwrap();

        let result = parse_titles_file(&path);
        std::fs::remove_file(&path).unwrap();

        let titles = result.unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].title, "Caf\u{FFFD}");
        assert_eq!(titles[0].description, "Bad \u{FFFD} byte");
    }
}
