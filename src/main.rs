//! Huli - Main entrypoint.
//!
//! Command-line front end for the substring-search engine: reads the
//! haystack from an argument or a file, parses search options at the
//! boundary, runs the coordinator through the timing wrapper, and prints
//! the result either in a human format or as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;

use huli_lib::config::{self, ConfigLoader, LogConfig, ENV_PREFIX};
use huli_lib::engine::{
    Algorithm, Direction, SearchCoordinator, SearchOptions, SearchOutcome, TimedCoordinator,
};

/// Command line arguments for Huli.
#[derive(Parser, Debug)]
#[clap(name = "huli", version, author, about = "Substring search utility")]
struct Args {
    /// String to search in
    #[clap(long, conflicts_with = "file")]
    string: Option<String>,

    /// Path to the file to search in
    #[clap(long)]
    file: Option<PathBuf>,

    /// Substring(s) to search for
    #[clap(long = "substring", required = true, num_args = 1..)]
    substrings: Vec<String>,

    /// Enable case-sensitive search
    #[clap(long)]
    case_sensitive: bool,

    /// Search method: 'first' (default) or 'last'
    #[clap(long)]
    method: Option<String>,

    /// Algorithm: kmp, bm, rk, bmh or automaton (default: auto-select)
    #[clap(long)]
    algorithm: Option<String>,

    /// Return only the first k occurrences per substring
    #[clap(long)]
    count: Option<usize>,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,

    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration: an explicit file must exist, the default
    // location may be absent.
    let loaded = match &args.config {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX).load()?,
        None => config::load_default()?,
    };
    init_logging(&loaded.log)?;
    config::init_global_config(loaded);
    let settings = config::get_global_config().get().search.clone();

    // Resolve options: command line over configuration file. Algorithm and
    // direction identifiers are parsed here, at the boundary, so unknown
    // names fail before any scanning starts.
    let direction: Direction = match &args.method {
        Some(name) => name.parse()?,
        None => settings.direction,
    };
    let algorithm: Option<Algorithm> = match &args.algorithm {
        Some(name) => Some(name.parse::<Algorithm>()?),
        None => settings.algorithm,
    };
    let case_sensitive = args.case_sensitive || settings.case_sensitive;
    let limit = args.count.or(settings.limit);

    let mut options = SearchOptions::new()
        .case_sensitive(case_sensitive)
        .direction(direction);
    if let Some(algorithm) = algorithm {
        options = options.algorithm(algorithm);
    }
    if let Some(limit) = limit {
        options = options.limit(limit);
    }

    // Read the haystack either from the argument or from a file.
    let text = if let Some(path) = &args.file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    } else if let Some(string) = args.string {
        string
    } else {
        bail!("Either --string or --file must be provided.");
    };

    let coordinator = TimedCoordinator::new(SearchCoordinator::with_options(options), |timing| {
        info!(
            elapsed_us = timing.elapsed.as_micros() as u64,
            patterns = timing.pattern_count,
            "search completed"
        );
    });

    let patterns: Vec<&str> = args.substrings.iter().map(String::as_str).collect();
    let outcome = coordinator.search(&text, &patterns)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        SearchOutcome::NoMatch => println!("No occurrences found."),
        SearchOutcome::Single(indices) => {
            println!("Found occurrences:");
            let shown = if case_sensitive {
                patterns[0].to_string()
            } else {
                patterns[0].to_lowercase()
            };
            println!("Substring '{shown}' found at positions: {indices:?}");
        }
        SearchOutcome::Multiple(map) => {
            println!("Found occurrences:");
            for (pattern, indices) in map.iter() {
                println!("Substring '{pattern}' found at positions: {indices:?}");
            }
        }
    }

    Ok(())
}
