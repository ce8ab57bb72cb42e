//! Search command handler
//!
//! Runs one search flow through the coordinator and prints the table.

use crate::cli::{build_coordinator, formatter, init_logging, print_outcome, until_interrupted};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{Column, Segment};
use crate::geo::LocationMode;
use crate::request::{Outcome, SearchParams};
use clap::Args;
use tracing::debug;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Search keyword
    #[arg(long, short = 'k', default_value = "")]
    pub keyword: String,

    /// Location to geocode
    #[arg(long, short = 'l', conflicts_with = "here")]
    pub location: Option<String>,

    /// Detect location from IP address
    #[arg(long)]
    pub here: bool,

    /// Search radius in miles
    #[arg(long, short = 'r')]
    pub radius: Option<String>,

    /// Category: music, sports, arts, film, misc (or default)
    #[arg(long, short = 'c', default_value = "default")]
    pub category: String,

    /// Sort by column (name or index); repeat to toggle direction
    #[arg(long, short = 's')]
    pub sort: Vec<String>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    init_logging("warn");

    let formatter = formatter(&args.format)?;
    let segment = Segment::parse_filter(&args.category).map_err(Error::Config)?;
    let columns = parse_columns(&args.sort)?;

    let config = Config::load()?;

    let location = LocationMode::from_input(args.here, args.location.as_deref().unwrap_or(""));
    let radius = args
        .radius
        .unwrap_or_else(|| config.search.default_radius.to_string());
    let params = SearchParams::new(args.keyword, location)
        .with_radius(radius)
        .with_segment(segment.map(|s| s.id().to_string()));

    let coordinator = build_coordinator(&config)?;
    let outcome = until_interrupted(&coordinator, coordinator.handle_search_requested(&params)).await;

    let outcome = match outcome {
        Outcome::Completed(mut table) => {
            for column in columns {
                let direction = table.sort_by(column);
                debug!(?column, ?direction, "Sorted results");
            }
            Outcome::Completed(table)
        }
        other => other,
    };

    if !print_outcome(outcome, formatter.as_ref(), |f, table| f.table(table))? {
        std::process::exit(1);
    }

    Ok(())
}

fn parse_columns(values: &[String]) -> Result<Vec<Column>> {
    values
        .iter()
        .map(|value| {
            Column::parse(value)
                .ok_or_else(|| Error::Config(format!("Unknown sort column: {}", value)))
        })
        .collect()
}
