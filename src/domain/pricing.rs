// src/domain/pricing.rs

use crate::domain::property::PropertyFeatures;
use crate::geos::STATE_ADJUSTMENTS;
use crate::model::{ModelError, PriceModel};
use thiserror::Error;

pub const DEFAULT_MULTIPLIER: f64 = 1.03;
pub const DEFAULT_DESCRIPTION: &str = "+3% (General market)";

/// Applied when the location could not be resolved.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub multiplier: f64,
    pub description: &'static str,
}

/// Exact-match lookup of the state market adjustment.
pub fn adjustment_for(state: &str) -> Adjustment {
    STATE_ADJUSTMENTS
        .iter()
        .find(|(name, _, _)| *name == state)
        .map(|&(_, multiplier, description)| Adjustment {
            multiplier,
            description,
        })
        .unwrap_or(Adjustment {
            multiplier: DEFAULT_MULTIPLIER,
            description: DEFAULT_DESCRIPTION,
        })
}

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("living area must be greater than 0")]
    InvalidInput,
    #[error(transparent)]
    ModelFailure(#[from] ModelError),
}

/// Run the model once and scale its output by `multiplier`.
pub fn estimate(
    model: &dyn PriceModel,
    features: &PropertyFeatures,
    multiplier: f64,
) -> Result<f64, EstimateError> {
    if !(features.living_area_sqft.is_finite() && features.living_area_sqft > 0.0) {
        return Err(EstimateError::InvalidInput);
    }

    let output = model.predict(&features.to_vector())?;
    let raw = output.first().copied().ok_or(ModelError::EmptyOutput)?;
    let price = raw * multiplier;
    if !(raw.is_finite() && price.is_finite()) {
        return Err(ModelError::NonFinite.into());
    }

    Ok(price)
}

/// `315000.0` -> `"$315,000.00"`. Exact for any finite amount.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // No sign on amounts that round to zero.
    let sign = if amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}
