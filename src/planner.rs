use log::*;
use rand::Rng;

use crate::geo::random_nearby_point;
use crate::path::{duration_to_frame_count, sample, SampledPath};
use crate::services::{DirectionsService, GeocodingService};
use crate::{GenericError, RouteScoutError};

/// Tunables for [`PathPlanner`]. `Default` is the production tuning.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Distance from the destination at which a start point is synthesized.
    pub start_radius_km: f64,
    /// How many fetch-route-and-sample cycles to try before giving up.
    pub max_attempts: u32,
    pub frame_seconds: f64,
    pub padding_seconds: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            start_radius_km: 15.0,
            max_attempts: 50,
            frame_seconds: crate::path::DEFAULT_FRAME_SECONDS,
            padding_seconds: crate::path::DEFAULT_PADDING_SECONDS,
        }
    }
}

/// Plans a waypoint path toward a destination by driving the geocoding and
/// directions collaborators.
///
/// A short or empty route is recoverable: each attempt synthesizes a fresh
/// random start on the configured ring and tries again, up to
/// `max_attempts`. Exhausting the budget is fatal for the run.
pub struct PathPlanner<G, D> {
    geocoder: G,
    directions: D,
    config: PlannerConfig,
}

impl<G, D> PathPlanner<G, D>
where
    G: GeocodingService,
    D: DirectionsService,
{
    pub fn new(geocoder: G, directions: D) -> Self {
        Self::with_config(geocoder, directions, PlannerConfig::default())
    }

    pub fn with_config(geocoder: G, directions: D, config: PlannerConfig) -> Self {
        PathPlanner {
            geocoder,
            directions,
            config,
        }
    }

    /// Plan a path of exactly `num_points` waypoints ending at `destination`.
    pub async fn plan<R: Rng + ?Sized>(
        &self,
        destination: &str,
        num_points: usize,
        rng: &mut R,
    ) -> Result<SampledPath, GenericError> {
        let destination_coord = self.geocoder.geocode(destination).await?;
        debug!("Destination {:?} is at {:?}.", destination, destination_coord);

        for attempt in 1..=self.config.max_attempts {
            let start = random_nearby_point(destination_coord, self.config.start_radius_km, rng);
            let route = self.directions.route(start, destination_coord).await?;
            if route.is_empty() {
                debug!("Attempt {}: no route from {:?}.", attempt, start);
                continue;
            }

            let points = sample(&route, num_points);
            if points.len() == num_points {
                info!(
                    "Planned {} waypoints toward {:?} on attempt {}.",
                    num_points, destination, attempt
                );
                return Ok(SampledPath::new(points));
            }
            debug!(
                "Attempt {}: only {} of {} waypoints.",
                attempt,
                points.len(),
                num_points
            );
        }

        warn!(
            "Gave up on {:?} after {} attempts.",
            destination, self.config.max_attempts
        );
        Err(RouteScoutError::AttemptsExhausted {
            wanted: num_points,
            attempts: self.config.max_attempts,
        }
        .into())
    }

    /// Plan a path sized to `duration_seconds` of narration, using the
    /// configured frame timing.
    pub async fn plan_for_duration<R: Rng + ?Sized>(
        &self,
        destination: &str,
        duration_seconds: f64,
        rng: &mut R,
    ) -> Result<SampledPath, GenericError> {
        let num_points = duration_to_frame_count(
            duration_seconds,
            self.config.frame_seconds,
            self.config.padding_seconds,
        );
        self.plan(destination, num_points, rng).await
    }

    /// Plan between two named places, without the random-start retry cycle.
    ///
    /// With a fixed start there is nothing to re-roll, so the result may be
    /// shorter than `num_points` (including empty when no route exists);
    /// callers check the length.
    pub async fn plan_between(
        &self,
        start: &str,
        destination: &str,
        num_points: usize,
    ) -> Result<SampledPath, GenericError> {
        let start_coord = self.geocoder.geocode(start).await?;
        let destination_coord = self.geocoder.geocode(destination).await?;
        let route = self.directions.route(start_coord, destination_coord).await?;
        Ok(SampledPath::new(sample(&route, num_points)))
    }
}
