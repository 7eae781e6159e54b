use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{CatalogIndex, CatalogStats, ContentType, IndexConfig, Recommendation, Title};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// FlixRecs - Content-based recommendations for a streaming catalog
#[derive(Parser)]
#[command(name = "flix-recs")]
#[command(about = "Catalog recommendations using TF-IDF and cosine similarity", long_about = None)]
struct Cli {
    /// Path to the titles CSV
    #[arg(short, long, global = true, default_value = "netflix_titles.csv")]
    data_file: PathBuf,

    /// Maximum TF-IDF vocabulary size
    #[arg(long, global = true, default_value = "5000")]
    max_features: usize,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Titles similar to a catalog title
    Similar {
        /// Title to start from (exact, then substring match)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Titles similar to a free-text description
    Describe {
        /// Description of what you want to watch
        #[arg(long)]
        text: String,

        /// Only return titles of this type (movie or show)
        #[arg(long)]
        content_type: Option<ContentType>,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Newest titles in a genre
    Genre {
        /// Genre name as listed in the dataset
        #[arg(long)]
        genre: String,

        #[arg(long)]
        content_type: Option<ContentType>,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Search titles, descriptions, cast and directors
    Search {
        /// Case-insensitive substring to look for
        #[arg(long)]
        query: String,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Newest titles overall
    Popular {
        #[arg(long)]
        content_type: Option<ContentType>,

        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show dataset statistics
    Stats,
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Loading catalog from {}", cli.data_file.display());
    let start = Instant::now();
    let config = IndexConfig::new().with_max_features(Some(cli.max_features));
    let index = CatalogIndex::load(&cli.data_file, config)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_file.display()))?;
    info!(
        "Indexed {} titles ({} terms) in {:.2?}",
        index.catalog().len(),
        index.vocabulary_size(),
        start.elapsed()
    );

    match cli.command {
        Commands::Similar { title, limit } => handle_similar(&index, &title, limit, cli.json)?,
        Commands::Describe {
            text,
            content_type,
            limit,
        } => handle_describe(&index, &text, content_type, limit, cli.json)?,
        Commands::Genre {
            genre,
            content_type,
            limit,
        } => handle_genre(&index, &genre, content_type, limit, cli.json)?,
        Commands::Search { query, limit } => {
            let titles = index.search(&query, limit);
            print_titles(&format!("Search results for '{}'", query), &titles, cli.json)?;
        }
        Commands::Popular {
            content_type,
            limit,
        } => {
            let titles = index.popular_titles(content_type, limit);
            let heading = match content_type {
                Some(content_type) => format!("Newest {}s", content_type.label()),
                None => "Newest titles".to_string(),
            };
            print_titles(&heading, &titles, cli.json)?;
        }
        Commands::Stats => print_stats(&index.stats(), cli.json)?,
    }

    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(index: &CatalogIndex, title: &str, limit: usize, json: bool) -> Result<()> {
    let Some(position) = index.resolve_title(title) else {
        if json {
            println!("[]");
        } else {
            println!("{} No title matching '{}'", "✗".red(), title);
        }
        return Ok(());
    };

    let recommendations = index.recommend_by_title(title, limit);
    let heading = match index.catalog().get(position) {
        Some(found) => format!("Because you liked '{}'", found.title),
        None => format!("Because you liked '{}'", title),
    };
    print_recommendations(&heading, &recommendations, json)
}

/// Handle the 'describe' command
fn handle_describe(
    index: &CatalogIndex,
    text: &str,
    content_type: Option<ContentType>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let recommendations = index
        .recommend_by_description(text, content_type, limit)
        .context("Failed to score description")?;
    print_recommendations("Matches for your description", &recommendations, json)
}

/// Handle the 'genre' command
fn handle_genre(
    index: &CatalogIndex,
    genre: &str,
    content_type: Option<ContentType>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let titles = index.recommend_by_genre(genre, content_type, limit);
    if titles.is_empty() && !json {
        println!("{} No titles listed under '{}'", "✗".red(), genre);
        let known = index.catalog().genres();
        if !known.is_empty() {
            println!("Known genres: {}", known.join(", "));
        }
        return Ok(());
    }
    print_titles(&format!("Newest in '{}'", genre), &titles, json)
}

fn print_recommendations(heading: &str, recommendations: &[Recommendation], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recommendations)?);
        return Ok(());
    }

    println!("{}", format!("{}:", heading).bold().blue());
    if recommendations.is_empty() {
        println!("  (no matches)");
    }
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} - Score: {:.3}",
            (rank + 1).to_string().green(),
            describe_title(rec.title),
            rec.score
        );
    }
    Ok(())
}

fn print_titles(heading: &str, titles: &[&Title], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(titles)?);
        return Ok(());
    }

    println!("{}", format!("{}:", heading).bold().blue());
    if titles.is_empty() {
        println!("  (no matches)");
    }
    for (rank, title) in titles.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), describe_title(title));
    }
    Ok(())
}

fn print_stats(stats: &CatalogStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Total titles: {}", "• ".green(), stats.total_titles);
    println!("{}Movies: {}", "• ".green(), stats.movies);
    println!("{}TV shows: {}", "• ".green(), stats.tv_shows);
    println!("{}Unique genres: {}", "• ".cyan(), stats.unique_genres);
    match stats.release_year_range {
        Some((oldest, newest)) => println!("{}Release years: {}-{}", "• ".cyan(), oldest, newest),
        None => println!("{}Release years: unknown", "• ".cyan()),
    }
    Ok(())
}

/// "Title (2019) [Movie] - Comedies, Dramas"
fn describe_title(title: &Title) -> String {
    let mut line = title.title.bold().to_string();
    if let Some(year) = title.release_year {
        line.push_str(&format!(" ({})", year));
    }
    if let Some(content_type) = title.content_type {
        line.push_str(&format!(" [{}]", content_type.label()));
    }
    if !title.genres.is_empty() {
        line.push_str(&format!(" - {}", title.genres.join(", ")));
    }
    line
}
