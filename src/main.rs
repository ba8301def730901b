use std::path::PathBuf;

use log::{info, trace};

use route_scout::geo::distance_km;
use route_scout::services::directions::GoogleMapsDirections;
use route_scout::services::geocoding::GoogleMapsGeocoder;
use route_scout::PathPlanner;

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_module("route_scout", log::LevelFilter::Trace)
        .init();
    trace!("Logger init with level TRACE.");

    let mut args = std::env::args().skip(1);
    let destination = args
        .next()
        .expect("Usage: route-scout <destination> [num-points] [out-file]");
    let num_points: usize = args
        .next()
        .map(|arg| arg.parse().expect("num-points must be a whole number."))
        .unwrap_or(10);
    let out_file: PathBuf = args
        .next()
        .unwrap_or_else(|| "path_coordinates.json".to_string())
        .into();

    let api_key = dotenv::var("GOOGLE_MAPS_TOKEN").expect("GOOGLE_MAPS_TOKEN not set.");

    let planner = PathPlanner::new(
        GoogleMapsGeocoder::new(&api_key),
        GoogleMapsDirections::new(&api_key),
    );
    let path = planner
        .plan(&destination, num_points, &mut rand::thread_rng())
        .await
        .expect("Planning failed.");

    let covered: f64 = path
        .points
        .windows(2)
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum();
    info!(
        "{} waypoints covering {:.1} km toward {}.",
        path.len(),
        covered,
        destination
    );

    path.save(&out_file).expect("Could not write the waypoint file.");
    println!("Wrote {} waypoints to {}.", path.len(), out_file.display());
}
