use crate::geo::Coordinate;
use crate::{GenericError, RouteScoutError};

use async_trait::async_trait;
use google_maps::GoogleMapsClient;
use log::*;
use rust_decimal::prelude::ToPrimitive;

/// Resolves a free-text place name to a coordinate. First match wins.
#[async_trait]
pub trait GeocodingService {
    async fn geocode(&self, query: &str) -> Result<Coordinate, GenericError>;
}

pub struct GoogleMapsGeocoder {
    client: GoogleMapsClient,
}

impl GoogleMapsGeocoder {
    pub fn new(api_key: &str) -> Self {
        GoogleMapsGeocoder {
            client: GoogleMapsClient::new(api_key),
        }
    }
}

#[async_trait]
impl GeocodingService for GoogleMapsGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinate, GenericError> {
        let response = self
            .client
            .geocoding()
            .with_address(query)
            .execute()
            .await?;
        let location = &response
            .results
            .first()
            .ok_or(RouteScoutError::LocationNotFound())?
            .geometry
            .location;
        trace!("Received coordinates from the geocoding API.");
        Ok(Coordinate::new(
            location
                .lat
                .to_f64()
                .ok_or(RouteScoutError::InvalidCoordinate())?,
            location
                .lng
                .to_f64()
                .ok_or(RouteScoutError::InvalidCoordinate())?,
        ))
    }
}
