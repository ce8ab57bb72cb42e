//! Event command handler
//!
//! Shows the detail card for one event, optionally followed by its venue.

use crate::cli::{build_coordinator, formatter, init_logging, print_outcome, until_interrupted};
use crate::config::Config;
use crate::error::Result;
use crate::request::Outcome;
use clap::Args;

/// Event command arguments
#[derive(Args)]
pub struct EventArgs {
    /// Event id (from search results)
    pub id: String,

    /// Also show the event's venue
    #[arg(long)]
    pub venue: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the event command
pub async fn run(args: EventArgs) -> Result<()> {
    init_logging("warn");

    let formatter = formatter(&args.format)?;
    let config = Config::load()?;
    let coordinator = build_coordinator(&config)?;

    let outcome = until_interrupted(&coordinator, coordinator.handle_event_selected(&args.id)).await;

    let venue_name = match &outcome {
        Outcome::Completed(details) if args.venue => details.venue_name().map(str::to_string),
        _ => None,
    };

    if !print_outcome(outcome, formatter.as_ref(), |f, details| f.event(details))? {
        std::process::exit(1);
    }

    if let Some(name) = venue_name {
        println!();
        let outcome =
            until_interrupted(&coordinator, coordinator.handle_venue_requested(&name)).await;
        if !print_outcome(outcome, formatter.as_ref(), |f, details| f.venue(details))? {
            std::process::exit(1);
        }
    }

    Ok(())
}
