use crate::geo::Coordinate;
use crate::{polyline, GenericError};

use async_trait::async_trait;
use google_maps::directions::{DirectionsStatus as Status, Location};
use google_maps::{GoogleMapsClient, LatLng};
use log::*;

/// Fetches a driving route between two coordinates.
///
/// "No route" is a normal outcome and comes back as an empty sequence; only
/// transport failures and undecodable responses are errors.
#[async_trait]
pub trait DirectionsService {
    async fn route(
        &self,
        start: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, GenericError>;
}

pub struct GoogleMapsDirections {
    client: GoogleMapsClient,
}

impl GoogleMapsDirections {
    pub fn new(api_key: &str) -> Self {
        GoogleMapsDirections {
            client: GoogleMapsClient::new(api_key),
        }
    }
}

#[async_trait]
impl DirectionsService for GoogleMapsDirections {
    async fn route(
        &self,
        start: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, GenericError> {
        let response = self
            .client
            .directions(
                Location::LatLng(LatLng::try_from_f64(start.lat, start.lon)?),
                Location::LatLng(LatLng::try_from_f64(destination.lat, destination.lon)?),
            )
            .execute()
            .await?;

        if response.status != Status::Ok {
            debug!("Directions status: {:?}", response.status);
            return Ok(vec![]);
        }
        let Some(route) = response.routes.first() else {
            return Ok(vec![]);
        };
        trace!("Received a route from the directions API.");

        Ok(polyline::decode(&route.overview_polyline.points)?)
    }
}
