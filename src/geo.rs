use rand::Rng;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }
}

/// Initial great-circle bearing from `a` toward `b`, in compass degrees.
///
/// 0° is north, increasing clockwise, output in `[0, 360)`. Identical
/// endpoints come out as exactly 0.
pub fn initial_heading(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    // Convert before subtracting: the delta in degrees rounds differently.
    let delta_lon = b.lon.to_radians() - a.lon.to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Destination point `distance_km` from `center` along `bearing_deg`.
///
/// Spherical destination formula. Longitude is not re-normalized past ±180°
/// and the formula degrades near the poles.
pub fn offset(center: Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let lat1 = center.lat.to_radians();
    let lon1 = center.lon.to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Point at a uniformly random bearing, `radius_km` from `center`.
pub fn random_nearby_point<R: Rng + ?Sized>(
    center: Coordinate,
    radius_km: f64,
    rng: &mut R,
) -> Coordinate {
    offset(center, rng.gen_range(0.0..360.0), radius_km)
}

/// Haversine great-circle distance in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let half_dlat = (b.lat - a.lat).to_radians() / 2.0;
    let half_dlon = (b.lon - a.lon).to_radians() / 2.0;

    let h = half_dlat.sin() * half_dlat.sin()
        + lat1.cos() * lat2.cos() * half_dlon.sin() * half_dlon.sin();
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heading_known_value() {
        let result = initial_heading(Coordinate::new(37.0, -122.0), Coordinate::new(34.0, -118.0));
        assert_eq!(result, 131.47569357642328);
    }

    #[test]
    fn heading_due_north() {
        let result = initial_heading(
            Coordinate::new(37.7749, -122.4194),
            Coordinate::new(38.9072, -122.4194),
        );
        assert_eq!(result, 0.0);
    }

    #[test]
    fn heading_of_identical_points_is_zero() {
        let here = Coordinate::new(47.3769, 8.5417);
        assert_eq!(initial_heading(here, here), 0.0);
    }

    #[test]
    fn heading_stays_in_compass_range() {
        let lats = [-75.0, -33.9, 0.0, 37.0, 61.2];
        let lons = [-170.0, -122.4, 0.0, 8.5, 179.5];
        for &lat1 in &lats {
            for &lon1 in &lons {
                for &lat2 in &lats {
                    for &lon2 in &lons {
                        let h =
                            initial_heading(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2));
                        assert!((0.0..360.0).contains(&h), "heading {} out of range", h);
                    }
                }
            }
        }
    }

    #[test]
    fn offset_lands_at_requested_distance() {
        let zurich = Coordinate::new(47.3769, 8.5417);
        for bearing in [0.0, 45.0, 133.7, 270.0, 359.9] {
            let point = offset(zurich, bearing, 15.0);
            assert_float_absolute_eq!(distance_km(zurich, point), 15.0, 1e-9);
        }
    }

    #[test]
    fn random_nearby_point_respects_radius() {
        let center = Coordinate::new(48.8566, 2.3522);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let point = random_nearby_point(center, 15.0, &mut rng);
            assert_float_absolute_eq!(distance_km(center, point), 15.0, 1e-9);
        }
    }

    #[test]
    fn random_nearby_point_is_deterministic_for_a_seed() {
        let center = Coordinate::new(48.8566, 2.3522);
        let a = random_nearby_point(center, 15.0, &mut StdRng::seed_from_u64(42));
        let b = random_nearby_point(center, 15.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
