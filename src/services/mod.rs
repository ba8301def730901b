//! External collaborators, one trait per service so callers inject test
//! doubles instead of patching a process-wide client.

pub mod directions;
pub mod geocoding;

pub use directions::DirectionsService;
pub use geocoding::GeocodingService;
