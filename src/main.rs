//! Gleaner binary entry point
//!
//! Parses the command line, loads configuration, opens the document store
//! and dispatches to the requested stage. Crawling is the default; the
//! cleaning pass, the search console and a stats summary sit behind flags.

use clap::{ArgAction, Parser};
use gleaner::clean::run_cleaning;
use gleaner::config::{load_config_with_hash, Config};
use gleaner::crawl::{build_http_client, run_crawl};
use gleaner::search::{build_index, run_console};
use gleaner::storage::{open_store, DocumentStore, SqliteStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gleaner - a sitemap-driven page archiver and text search tool
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Rebuild the clean-text collection from stored pages
    #[arg(long, conflicts_with_all = ["search", "stats"])]
    clean: bool,

    /// Open the interactive search console
    #[arg(long, conflicts_with_all = ["clean", "stats"])]
    search: bool,

    /// Print collection counts and exit
    #[arg(long, conflicts_with_all = ["clean", "search"])]
    stats: bool,
}

/// Configures the tracing subscriber from the verbosity flags
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gleaner=info,warn"),
            1 => EnvFilter::new("gleaner=debug,info"),
            2 => EnvFilter::new("gleaner=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", cli.config.display(), e);
            return Err(e.into());
        }
    };
    tracing::info!("Loaded {} (hash {})", cli.config.display(), config_hash);

    let mut store = match open_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to open store at {}: {}",
                config.store.database_path,
                e
            );
            return Err(e.into());
        }
    };

    if cli.stats {
        handle_stats(&store)
    } else if cli.clean {
        handle_clean(&mut store)
    } else if cli.search {
        handle_search(&store)
    } else {
        handle_crawl(&config, &mut store).await
    }
}

/// Runs the default crawl mode and prints a summary
async fn handle_crawl(config: &Config, store: &mut SqliteStore) -> anyhow::Result<()> {
    let client = build_http_client()?;
    let stats = run_crawl(config, &client, store).await?;

    println!("Crawl complete:");
    println!("  Entries:   {}", stats.total);
    println!("  Saved:     {}", stats.created);
    println!("  Updated:   {}", stats.updated);
    println!("  Refreshed: {}", stats.refreshed);
    println!("  Skipped:   {}", stats.skipped);
    println!("  Failed:    {}", stats.failed);
    Ok(())
}

/// Rebuilds the clean-text collection
fn handle_clean(store: &mut SqliteStore) -> anyhow::Result<()> {
    let count = run_cleaning(store)?;
    println!("Cleaned {} documents", count);
    Ok(())
}

/// Builds the index and hands control to the query console
fn handle_search(store: &SqliteStore) -> anyhow::Result<()> {
    let (index, urls) = build_index(store)?;
    println!("Indexed {} documents ({} terms)", urls.len(), index.term_count());
    run_console(&index, &urls)?;
    Ok(())
}

/// Prints collection counts
fn handle_stats(store: &SqliteStore) -> anyhow::Result<()> {
    println!("Raw pages:     {}", store.count_pages()?);
    println!("Clean records: {}", store.count_clean()?);
    Ok(())
}
