use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::{initial_heading, Coordinate};
use crate::GenericError;

/// Seconds of footage per street-level frame.
pub const DEFAULT_FRAME_SECONDS: f64 = 0.4;
/// Trailing seconds so the drive can come to a stop at the destination.
pub const DEFAULT_PADDING_SECONDS: f64 = 10.0;

/// Number of frames needed to cover `duration_seconds` of narration.
pub fn duration_to_frame_count(
    duration_seconds: f64,
    per_frame_seconds: f64,
    padding_seconds: f64,
) -> usize {
    ((duration_seconds + padding_seconds) / per_frame_seconds) as usize
}

/// Take the first `min(num_points, route.len())` points, in route order.
///
/// Truncation, not even resampling. A result shorter than `num_points` is a
/// normal outcome; deciding whether to retry with a fresh route belongs to
/// the caller.
pub fn sample(route: &[Coordinate], num_points: usize) -> Vec<Coordinate> {
    route.iter().take(num_points).copied().collect()
}

/// An ordered waypoint sequence, one street-level frame per point.
///
/// This is the per-run artifact handed to the image-fetch step. It is not a
/// long-term storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledPath {
    pub points: Vec<Coordinate>,
}

impl SampledPath {
    pub fn new(points: Vec<Coordinate>) -> Self {
        SampledPath { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Compass heading from each waypoint toward its successor.
    ///
    /// One fewer entry than there are waypoints; the camera at the last
    /// point has nothing left to look toward.
    pub fn headings(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| initial_heading(pair[0], pair[1]))
            .collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), GenericError> {
        serde_json::to_writer(File::create(path)?, self)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, GenericError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn line(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(47.0 + 0.001 * i as f64, 8.0 + 0.002 * i as f64))
            .collect()
    }

    #[test]
    fn frame_count_with_default_timing() {
        assert_eq!(
            duration_to_frame_count(10.0, DEFAULT_FRAME_SECONDS, DEFAULT_PADDING_SECONDS),
            50
        );
        assert_eq!(
            duration_to_frame_count(20.0, DEFAULT_FRAME_SECONDS, DEFAULT_PADDING_SECONDS),
            75
        );
        assert_eq!(
            duration_to_frame_count(0.0, DEFAULT_FRAME_SECONDS, DEFAULT_PADDING_SECONDS),
            25
        );
    }

    #[test]
    fn sample_truncates_to_requested_count() {
        let route = line(20);
        let sampled = sample(&route, 10);
        assert_eq!(sampled.len(), 10);
        assert_eq!(sampled, route[..10]);
    }

    #[test]
    fn sample_of_a_short_route_is_short() {
        let route = line(4);
        let sampled = sample(&route, 10);
        assert_eq!(sampled, route);
    }

    #[test]
    fn sample_of_an_empty_route_is_empty() {
        assert!(sample(&[], 10).is_empty());
    }

    #[test]
    fn headings_pair_each_point_with_its_successor() {
        let path = SampledPath::new(line(10));
        let headings = path.headings();
        assert_eq!(headings.len(), 9);
        for heading in headings {
            assert!((0.0..360.0).contains(&heading));
        }
    }

    #[test]
    fn artifact_round_trips_through_disk() {
        let dir = TempDir::new("route-scout").unwrap();
        let file = dir.path().join("path_coordinates.json");

        let path = SampledPath::new(line(5));
        path.save(&file).unwrap();
        assert_eq!(SampledPath::load(&file).unwrap(), path);
    }
}
