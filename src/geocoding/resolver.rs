// src/geocoding/resolver.rs
use crate::domain::location::{LocationResult, UNKNOWN_STATE};
use crate::domain::zip::ZipCode;
use crate::geocoding::{Geocoder, GeocodingError, TtlCache};
use std::sync::Mutex;

/// Resolves ZIP codes to coordinates and a state, memoizing successful
/// lookups for `ttl_secs`. Failures are not cached.
pub struct LocationResolver {
    geocoder: Box<dyn Geocoder>,
    cache: Mutex<TtlCache<ZipCode, LocationResult>>,
    ttl_secs: i64,
}

impl LocationResolver {
    pub fn new(geocoder: Box<dyn Geocoder>, ttl_secs: i64) -> Self {
        Self {
            geocoder,
            cache: Mutex::new(TtlCache::new(ttl_secs)),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn resolve(&self, zip: &ZipCode, now: i64) -> Result<LocationResult, GeocodingError> {
        if let Some(hit) = self.cached(zip, now) {
            tracing::debug!(%zip, "geocode cache hit");
            return Ok(hit);
        }

        let coordinates = self
            .geocoder
            .forward(&zip.geocode_query())?
            .ok_or(GeocodingError::NotFound)?;

        let state = match self.geocoder.reverse(coordinates) {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::warn!(%zip, "reverse geocode returned no state");
                UNKNOWN_STATE.to_string()
            }
            Err(e) => {
                tracing::warn!(%zip, error = %e, "reverse geocode failed");
                UNKNOWN_STATE.to_string()
            }
        };

        let location = LocationResult { coordinates, state };
        tracing::info!(%zip, state = %location.state, "resolved location");

        if let Ok(mut cache) = self.cache.lock() {
            cache.purge_expired(now);
            cache.put(zip.clone(), location.clone(), now);
            tracing::debug!(cached = cache.len(), "geocode cache updated");
        }

        Ok(location)
    }

    fn cached(&self, zip: &ZipCode, now: i64) -> Option<LocationResult> {
        // A poisoned lock only costs us the cache.
        self.cache.lock().ok()?.get(zip, now)
    }
}
