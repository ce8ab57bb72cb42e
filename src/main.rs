//! event-search CLI entry point
//!
//! Nearby event search - CLI + proxy server

use event_search::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
