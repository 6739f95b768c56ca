// src/domain/location.rs

pub const UNKNOWN_STATE: &str = "Unknown";

/// Geographic centre of the contiguous United States.
pub const US_CENTER: Coordinates = Coordinates {
    latitude: 39.8283,
    longitude: -98.5795,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub coordinates: Coordinates,
    /// English state name, or [`UNKNOWN_STATE`] when reverse geocoding
    /// could not supply one.
    pub state: String,
}

impl LocationResult {
    pub fn has_known_state(&self) -> bool {
        self.state != UNKNOWN_STATE
    }
}
