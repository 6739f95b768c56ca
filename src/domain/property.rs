// src/domain/property.rs

use std::collections::HashMap;
use thiserror::Error;

/// Attributes of the house being priced, captured once per submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyFeatures {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub living_area_sqft: f64,
    pub condition: u8,
    pub nearby_schools: u32,
}

impl PropertyFeatures {
    /// Fixed feature order the model was trained on.
    pub fn to_vector(&self) -> [f64; 5] {
        [
            f64::from(self.bedrooms),
            f64::from(self.bathrooms),
            self.living_area_sqft,
            f64::from(self.condition),
            f64::from(self.nearby_schools),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} must be a whole number of 0 or more")]
    NotAWholeNumber(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("Condition/Quality must be between 1 and 5")]
    ConditionOutOfRange,
}

/// Raw form values as submitted. Kept as strings so the form can be
/// re-rendered exactly as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub bedrooms: String,
    pub bathrooms: String,
    pub living_area: String,
    pub condition: String,
    pub schools: String,
    pub zip: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            bedrooms: "3".into(),
            bathrooms: "2".into(),
            living_area: "1500".into(),
            condition: "3".into(),
            schools: "2".into(),
            zip: "12345".into(),
        }
    }
}

impl PropertyForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        Self {
            bedrooms: get("bedrooms"),
            bathrooms: get("bathrooms"),
            living_area: get("living_area"),
            condition: get("condition"),
            schools: get("schools"),
            // ZIP is validated verbatim; surrounding whitespace is a format error.
            zip: fields.get("zip").cloned().unwrap_or_default(),
        }
    }

    pub fn features(&self) -> Result<PropertyFeatures, InputError> {
        let condition = parse_count(&self.condition, "Condition/Quality")?;
        if !(1..=5).contains(&condition) {
            return Err(InputError::ConditionOutOfRange);
        }

        Ok(PropertyFeatures {
            bedrooms: parse_count(&self.bedrooms, "Bedrooms")?,
            bathrooms: parse_count(&self.bathrooms, "Bathrooms")?,
            living_area_sqft: parse_area(&self.living_area)?,
            condition: condition as u8,
            nearby_schools: parse_count(&self.schools, "Nearby Schools")?,
        })
    }
}

fn parse_count(raw: &str, field: &'static str) -> Result<u32, InputError> {
    raw.parse::<u32>()
        .map_err(|_| InputError::NotAWholeNumber(field))
}

fn parse_area(raw: &str) -> Result<f64, InputError> {
    const FIELD: &str = "Living Area";

    let value: f64 = raw.parse().map_err(|_| InputError::NotANumber(FIELD))?;
    if !value.is_finite() {
        return Err(InputError::NotANumber(FIELD));
    }
    // Values <= 0 are rejected by the estimator, not here.
    Ok(value)
}
