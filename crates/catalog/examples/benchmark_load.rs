use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let path = Path::new("netflix_titles.csv");

    println!("Loading title catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)?;
    let elapsed = start.elapsed();

    let stats = catalog.stats();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", stats.total_titles);
    println!("Movies: {}", stats.movies);
    println!("TV shows: {}", stats.tv_shows);
    println!("Genres: {}", stats.unique_genres);
    println!("\nPerformance: {:.0} titles/second",
             stats.total_titles as f64 / elapsed.as_secs_f64());
    Ok(())
}
