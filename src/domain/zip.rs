// src/domain/zip.rs

use std::fmt;
use thiserror::Error;

pub const MIN_ZIP: u32 = 501;
pub const MAX_ZIP: u32 = 99950;

/// Three-digit prefixes treated as outside the supported US set.
pub const EXCLUDED_PREFIXES: [u32; 9] = [340, 962, 963, 964, 965, 966, 967, 968, 969];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipError {
    #[error("ZIP code must be a 5-digit number")]
    InvalidFormat,
    #[error("ZIP code must be a valid US ZIP code")]
    OutOfRange,
    #[error("ZIP code must be a valid US ZIP code")]
    ExcludedTerritory,
}

/// A validated five digit US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Free-text query handed to the forward geocoder.
    pub fn geocode_query(&self) -> String {
        format!("{}, USA", self.0)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate(zip: &str) -> Result<ZipCode, ZipError> {
    if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ZipError::InvalidFormat);
    }

    let value: u32 = zip.parse().map_err(|_| ZipError::InvalidFormat)?;
    if !(MIN_ZIP..=MAX_ZIP).contains(&value) {
        return Err(ZipError::OutOfRange);
    }

    if EXCLUDED_PREFIXES.contains(&(value / 100)) {
        return Err(ZipError::ExcludedTerritory);
    }

    Ok(ZipCode(zip.to_string()))
}
