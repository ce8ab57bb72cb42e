//! Geohash encoding
//!
//! Compresses a coordinate into a short base32 token by interleaved
//! bisection of the longitude and latitude ranges.

use crate::constants::geohash::BASE32;
use crate::geo::Coordinate;

/// Encode a latitude/longitude pair into a geohash of `precision` characters
///
/// # Algorithm
/// Starting from the full ranges, alternately halve the longitude interval
/// (even bits) and the latitude interval (odd bits). A value strictly above
/// the midpoint emits a `1` and keeps the upper half, otherwise a `0` and the
/// lower half. Every 5 bits index one symbol of the base32 alphabet.
///
/// Inputs are not validated: out-of-range or NaN values still produce a
/// token of the requested length, but it does not describe a real cell.
pub fn encode(lat: f64, lng: f64, precision: usize) -> String {
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lng_range = (-180.0_f64, 180.0_f64);

    let mut geohash = String::with_capacity(precision);
    let mut index = 0usize;
    let mut bits = 0u8;
    let mut even = true;

    while geohash.len() < precision {
        let (value, range) = if even {
            (lng, &mut lng_range)
        } else {
            (lat, &mut lat_range)
        };

        let mid = (range.0 + range.1) / 2.0;
        if value > mid {
            index = index * 2 + 1;
            range.0 = mid;
        } else {
            index *= 2;
            range.1 = mid;
        }

        even = !even;
        bits += 1;
        if bits == 5 {
            geohash.push(BASE32[index] as char);
            bits = 0;
            index = 0;
        }
    }

    geohash
}

/// Encode a coordinate
pub fn encode_coordinate(coord: Coordinate, precision: usize) -> String {
    encode(coord.lat, coord.lng, precision)
}
