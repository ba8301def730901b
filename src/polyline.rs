//! Decoder for the Encoded Polyline Algorithm Format used by mapping
//! providers: signed coordinate deltas, zig-zag encoded, split into 5-bit
//! chunks (low bits first, 0x20 as the continuation flag) and offset by 63
//! into printable ASCII. Precision is 1e-5 degrees.

use crate::geo::Coordinate;
use crate::RouteScoutError;

/// Decode an encoded polyline into its coordinate sequence.
///
/// The empty string is a valid empty polyline. Truncated or non-polyline
/// bytes fail with [`RouteScoutError::MalformedPolyline`] carrying the byte
/// offset of the offending character.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, RouteScoutError> {
    let bytes = encoded.as_bytes();
    let mut coordinates = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, next) = decode_delta(bytes, index)?;
        let (delta_lon, next) = decode_delta(bytes, next)?;
        lat += delta_lat;
        lon += delta_lon;
        // Divide rather than multiply by 1e-5; the two round differently
        // at this precision.
        coordinates.push(Coordinate::new(lat as f64 / 1e5, lon as f64 / 1e5));
        index = next;
    }

    Ok(coordinates)
}

fn decode_delta(bytes: &[u8], mut index: usize) -> Result<(i64, usize), RouteScoutError> {
    let mut shift = 0u32;
    let mut value: i64 = 0;

    loop {
        let byte = *bytes
            .get(index)
            .ok_or(RouteScoutError::MalformedPolyline(index))?;
        if !(63..=126).contains(&byte) {
            return Err(RouteScoutError::MalformedPolyline(index));
        }
        let chunk = (byte - 63) as i64;
        value |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;
        if chunk & 0x20 == 0 {
            break;
        }
    }

    let delta = if value & 1 == 1 { !(value >> 1) } else { value >> 1 };
    Ok((delta, index))
}
