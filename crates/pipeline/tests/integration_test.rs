//! Integration tests for the pipeline.
//!
//! These tests verify that filters and feature composition work together
//! over a realistic catalog.

use catalog::{Catalog, ContentType, Title};
use pipeline::filters::*;
use pipeline::{FeatureComposer, Filter, FilterPipeline};

fn create_test_catalog() -> Catalog {
    let titles = vec![
        Title {
            content_type: Some(ContentType::Movie),
            genres: vec!["Comedies".into(), "Romantic Movies".into()],
            description: "Two rivals fall for each other at a bake sale.".into(),
            cast: vec!["Ann Lee".into()],
            director: "Dana Wells".into(),
            release_year: Some(2019),
            ..Title::new("s1", "Sweet Rivals")
        },
        Title {
            content_type: Some(ContentType::Show),
            genres: vec!["TV Comedies".into()],
            description: "A night shift crew keeps a diner running.".into(),
            cast: vec!["Bo Chan".into(), "Ann Lee".into()],
            release_year: Some(2021),
            ..Title::new("s2", "Graveyard Diner")
        },
        Title {
            content_type: Some(ContentType::Movie),
            genres: vec!["Comedies".into()],
            description: "A road trip goes wrong in every possible way.".into(),
            director: "Mia Ford".into(),
            release_year: Some(2008),
            ..Title::new("s3", "Detour")
        },
        Title {
            content_type: Some(ContentType::Movie),
            genres: vec!["Documentaries".into()],
            description: "Inside the kitchens of the world's busiest diners.".into(),
            release_year: Some(2017),
            ..Title::new("s4", "Short Order")
        },
        // Unknown type, no genres
        Title::new("s5", "Untitled Project"),
    ];

    Catalog::from_titles(titles).unwrap()
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let catalog = create_test_catalog();

    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new("comedies"))
        .add_filter(ContentTypeFilter::new(ContentType::Movie));

    let hits = pipeline.apply_all(&catalog);

    // "TV Comedies" is a different genre; s2 is also a show
    assert_eq!(hits, vec![0, 2]);
}

#[test]
fn test_pipeline_preserves_candidate_order() {
    let catalog = create_test_catalog();

    let pipeline = FilterPipeline::new().add_filter(ContentTypeFilter::new(ContentType::Movie));
    let hits = pipeline.apply(vec![3, 2, 0, 4], &catalog);

    assert_eq!(hits, vec![3, 2, 0]);
}

#[test]
fn test_text_search_with_type_filter() {
    let catalog = create_test_catalog();

    let pipeline = FilterPipeline::new()
        .add_filter(TextSearchFilter::new("diner"))
        .add_optional_filter(Some(ContentTypeFilter::new(ContentType::Show)));

    assert_eq!(pipeline.len(), 2);
    assert_eq!(pipeline.apply_all(&catalog), vec![1]);

    // Cast search spans titles of both types
    let by_cast = FilterPipeline::new().add_filter(TextSearchFilter::new("ann lee"));
    assert_eq!(by_cast.apply_all(&catalog), vec![0, 1]);
}

#[test]
fn test_empty_pipeline_keeps_everything() {
    let catalog = create_test_catalog();

    let pipeline = FilterPipeline::new()
        .add_optional_filter(None::<GenreFilter>);

    assert!(pipeline.is_empty());
    assert_eq!(pipeline.apply_all(&catalog), vec![0, 1, 2, 3, 4]);
    assert!(catalog.titles().iter().all(|t| pipeline.matches(t)));
}

#[test]
fn test_features_for_filtered_titles() {
    let catalog = create_test_catalog();

    let documents = FeatureComposer::new().compose_all(&catalog);
    assert_eq!(documents.len(), catalog.len());

    let filter = GenreFilter::new("Comedies");
    for position in filter.apply((0..catalog.len()).collect(), &catalog) {
        assert!(
            documents[position].starts_with("Comedies"),
            "unexpected document: {}",
            documents[position]
        );
    }

    // Empty parts still leave their separators
    assert_eq!(documents[4], "   ");
    assert_eq!(
        documents[2],
        "Comedies A road trip goes wrong in every possible way.  Mia Ford"
    );
}

#[test]
fn test_genre_index_and_scan_agree_on_padded_genres() {
    let catalog = Catalog::from_titles(vec![
        Title {
            genres: vec![" Comedies".into()],
            ..Title::new("p1", "Padded")
        },
        Title {
            genres: vec!["Dramas".into()],
            ..Title::new("p2", "Plain")
        },
    ])
    .unwrap();

    let filter = GenreFilter::new("Comedies");
    let indexed = filter.apply((0..catalog.len()).collect(), &catalog);
    let scanned: Vec<usize> = (0..catalog.len())
        .filter(|&pos| filter.matches(&catalog.titles()[pos]))
        .collect();

    assert_eq!(indexed, vec![0]);
    assert_eq!(indexed, scanned);
}
