//! Geohash command handler

use crate::error::Result;
use crate::geo::{geohash, Coordinate};
use clap::Args;

/// Geohash command arguments
#[derive(Args)]
pub struct GeohashArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// Number of characters
    #[arg(long, short = 'p', default_value_t = crate::constants::geohash::DEFAULT_PRECISION)]
    pub precision: usize,
}

/// Run the geohash command
pub fn run(args: GeohashArgs) -> Result<()> {
    let coord = Coordinate::new(args.lat, args.lng);
    coord.validate()?;
    println!("{}", geohash::encode_coordinate(coord, args.precision));
    Ok(())
}
