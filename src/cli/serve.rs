//! Serve command handler
//!
//! Runs the search proxy in the foreground.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Command-line address overrides take precedence over the config file
    fn apply_to(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    init_logging("info");

    let mut config = Config::load()?;
    args.apply_to(&mut config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        upstream = %config.upstream.base_url,
        "Proxy listening on {}",
        config.server_addr()
    );

    server::run(config).await
}
