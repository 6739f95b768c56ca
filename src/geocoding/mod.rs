mod cache;
mod geocoding_error;
mod nominatim;
mod resolver;

pub use cache::TtlCache;
pub use geocoding_error::GeocodingError;
pub use nominatim::NominatimGeocoder;
pub use resolver::LocationResolver;

use crate::domain::location::Coordinates;

/// External geocoding collaborator.
pub trait Geocoder: Send + Sync {
    /// Free-text lookup. `Ok(None)` when the service has no match.
    fn forward(&self, query: &str) -> Result<Option<Coordinates>, GeocodingError>;

    /// State name for the coordinates, if the address carries one.
    fn reverse(&self, coordinates: Coordinates) -> Result<Option<String>, GeocodingError>;
}
