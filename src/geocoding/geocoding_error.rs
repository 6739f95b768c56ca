use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    #[error("no location found")]
    NotFound,
    #[error("geocoding request timed out")]
    Timeout,
    #[error("geocoding quota exceeded")]
    QuotaExceeded,
    #[error("{0}")]
    Failed(String),
}

impl From<reqwest::Error> for GeocodingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodingError::Timeout
        } else {
            GeocodingError::Failed(e.to_string())
        }
    }
}
