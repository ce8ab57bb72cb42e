//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod event;
pub mod geohash;
pub mod search;
pub mod serve;
pub mod venue;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::client::build_http_client;
use crate::events::HttpEventsClient;
use crate::format::{available_formats, get_formatter, OutputFormatter};
use crate::geo::google::GoogleGeocoder;
use crate::geo::ip_location::IpInfoLocator;
use crate::geo::LocationResolver;
use crate::request::{Outcome, RequestCoordinator};
use clap::{Parser, Subcommand};
use std::future::Future;
use tracing_subscriber::EnvFilter;

/// Coordinator wired to the real providers and the configured proxy
pub type Coordinator = RequestCoordinator<IpInfoLocator, GoogleGeocoder, HttpEventsClient>;

/// Search nearby events by keyword, category and location
#[derive(Parser)]
#[command(name = "event-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the search proxy (foreground)
    Serve(serve::ServeArgs),

    /// Search events near a location
    Search(search::SearchArgs),

    /// Show details for one event
    Event(event::EventArgs),

    /// Show details for a venue
    Venue(venue::VenueArgs),

    /// Encode a coordinate as a geohash
    Geohash(geohash::GeohashArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Event(args) => event::run(args).await,
        Commands::Venue(args) => venue::run(args).await,
        Commands::Geohash(args) => geohash::run(args),
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging to stderr, honouring RUST_LOG
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the coordinator from configuration
pub fn build_coordinator(config: &Config) -> Result<Coordinator> {
    let client = build_http_client(config.client_timeout())?;

    let resolver = LocationResolver::new(
        IpInfoLocator::with_client(
            client.clone(),
            &config.providers.ip_location_url,
            &config.api_keys.ipinfo,
        ),
        GoogleGeocoder::with_client(
            client.clone(),
            &config.providers.geocode_url,
            &config.api_keys.google_geocode,
        ),
    );
    let api = HttpEventsClient::new(client, &config.client.base_url);

    Ok(RequestCoordinator::new(resolver, api)
        .with_precision(config.search.precision)
        .with_max_results(config.search.max_results))
}

/// Look up an output formatter, listing the valid names on failure
pub fn formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format '{}'. Available: {}",
            name,
            names.join(", ")
        ))
    })
}

/// Drive a flow to completion; Ctrl-C cancels everything in flight
pub async fn until_interrupted<T>(
    coordinator: &Coordinator,
    flow: impl Future<Output = Outcome<T>>,
) -> Outcome<T> {
    tokio::pin!(flow);
    tokio::select! {
        outcome = &mut flow => outcome,
        _ = tokio::signal::ctrl_c() => {
            coordinator.reset();
            flow.await
        }
    }
}

/// Print a finished flow, or its notice
///
/// Returns false when the flow produced nothing to show.
pub fn print_outcome<T>(
    outcome: Outcome<T>,
    formatter: &dyn OutputFormatter,
    render: impl FnOnce(&dyn OutputFormatter, &T) -> Result<String>,
) -> Result<bool> {
    match outcome {
        Outcome::Completed(value) => {
            print!("{}", ensure_newline(render(formatter, &value)?));
            Ok(true)
        }
        Outcome::Failed(notice) => {
            print!("{}", ensure_newline(formatter.notice(notice)?));
            Ok(false)
        }
        Outcome::Cancelled | Outcome::Superseded => {
            eprintln!("Cancelled");
            Ok(false)
        }
    }
}

fn ensure_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
