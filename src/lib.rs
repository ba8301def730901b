use thiserror::Error;

pub mod geo;
pub mod path;
pub mod planner;
pub mod polyline;
pub mod services;

pub use geo::Coordinate;
pub use path::SampledPath;
pub use planner::{PathPlanner, PlannerConfig};

pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum RouteScoutError {
    #[error("Location not found.")]
    LocationNotFound(),
    #[error("Provider coordinate is not a finite number.")]
    InvalidCoordinate(),
    #[error("Malformed polyline at byte {0}.")]
    MalformedPolyline(usize),
    #[error("No route with {wanted} waypoints after {attempts} attempts.")]
    AttemptsExhausted { wanted: usize, attempts: u32 },
}
