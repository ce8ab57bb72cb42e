//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "search.precision")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    // Show path
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[search]");
    println!("default_radius = {}", config.search.default_radius);
    println!("precision = {}", config.search.precision);
    println!("max_results = {}", config.search.max_results);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!();

    println!("[client]");
    println!("base_url = \"{}\"", config.client.base_url);
    println!("timeout_secs = {}", config.client.timeout_secs);
    println!();

    println!("[upstream]");
    println!("base_url = \"{}\"", config.upstream.base_url);
    println!("timeout_secs = {}", config.upstream.timeout_secs);
    println!();

    println!("[providers]");
    println!("ip_location_url = \"{}\"", config.providers.ip_location_url);
    println!("geocode_url = \"{}\"", config.providers.geocode_url);
    println!();

    println!("[api_keys]");
    show_key("ipinfo", &config.api_keys.ipinfo);
    show_key("google_geocode", &config.api_keys.google_geocode);
    show_key("ticketmaster", &config.api_keys.ticketmaster);
}

fn show_key(name: &str, value: &str) {
    if value.is_empty() {
        println!("{} = \"\" # not configured", name);
    } else {
        println!("{} = \"***\" # configured", name);
    }
}
