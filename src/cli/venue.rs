//! Venue command handler

use crate::cli::{build_coordinator, formatter, init_logging, print_outcome, until_interrupted};
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Venue command arguments
#[derive(Args)]
pub struct VenueArgs {
    /// Venue name
    pub name: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the venue command
pub async fn run(args: VenueArgs) -> Result<()> {
    init_logging("warn");

    let formatter = formatter(&args.format)?;
    let config = Config::load()?;
    let coordinator = build_coordinator(&config)?;

    let outcome =
        until_interrupted(&coordinator, coordinator.handle_venue_requested(&args.name)).await;

    if !print_outcome(outcome, formatter.as_ref(), |f, details| f.venue(details))? {
        std::process::exit(1);
    }

    Ok(())
}
