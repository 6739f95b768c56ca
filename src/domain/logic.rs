// src/domain/logic.rs

use crate::app::App;
use crate::domain::location::{Coordinates, LocationResult, US_CENTER};
use crate::domain::pricing::{adjustment_for, estimate, format_usd, Adjustment, EstimateError, NEUTRAL_MULTIPLIER};
use crate::domain::property::{InputError, PropertyForm};
use crate::domain::zip::{self, ZipError};
use crate::errors::ServerError;
use crate::geocoding::GeocodingError;
use crate::sessions::SessionHandle;
use thiserror::Error;

/// Why the location panel fell back to the US centre.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationIssue {
    #[error(transparent)]
    Zip(#[from] ZipError),
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
}

/// Resolved location and its market adjustment for one ZIP input.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationContext {
    /// ZIP as typed by the user.
    pub zip: String,
    pub outcome: Result<(LocationResult, Adjustment), LocationIssue>,
}

impl LocationContext {
    /// 1.0 whenever the location could not be resolved.
    pub fn multiplier(&self) -> f64 {
        match &self.outcome {
            Ok((_, adjustment)) => adjustment.multiplier,
            Err(_) => NEUTRAL_MULTIPLIER,
        }
    }

    pub fn center(&self) -> Coordinates {
        match &self.outcome {
            Ok((location, _)) => location.coordinates,
            Err(_) => US_CENTER,
        }
    }
}

#[derive(Debug, Error)]
pub enum EstimateIssue {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

#[derive(Debug)]
pub struct EstimateReport {
    pub location: LocationContext,
    /// Formatted adjusted price.
    pub price: Result<String, EstimateIssue>,
}

/// Validate the ZIP and resolve it, reusing the session's last location
/// when the ZIP has not changed.
pub fn locate(
    app: &App,
    session: &SessionHandle,
    zip_input: &str,
    now: i64,
) -> Result<LocationContext, ServerError> {
    let zip = zip::validate(zip_input);
    let ttl = app.resolver.ttl_secs();

    let remembered = app.sessions.with_session(session, |s| {
        s.forget_location_unless(zip.as_ref().ok());
        zip.as_ref()
            .ok()
            .and_then(|z| s.remembered_location(z, now, ttl))
    })?;

    let resolved = match (zip, remembered) {
        (Err(e), _) => {
            tracing::info!(zip = zip_input, error = %e, "rejected ZIP");
            Err(LocationIssue::from(e))
        }
        (Ok(_), Some(location)) => Ok(location),
        (Ok(zip), None) => match app.resolver.resolve(&zip, now) {
            Ok(location) => {
                app.sessions
                    .with_session(session, |s| s.remember_location(zip, location.clone(), now))?;
                Ok(location)
            }
            Err(e) => {
                tracing::warn!(%zip, error = %e, "geocoding failed; using US centre");
                Err(LocationIssue::from(e))
            }
        },
    };

    Ok(LocationContext {
        zip: zip_input.to_string(),
        outcome: resolved.map(|location| {
            let adjustment = adjustment_for(&location.state);
            (location, adjustment)
        }),
    })
}

/// Handle one form submission: resolve the location, price the house and
/// append the result to the session history.
pub fn submit_estimate(
    app: &App,
    session: &SessionHandle,
    form: PropertyForm,
    now: i64,
) -> Result<EstimateReport, ServerError> {
    app.sessions
        .with_session(session, |s| s.form = form.clone())?;

    let location = locate(app, session, &form.zip, now)?;

    let price = form
        .features()
        .map_err(EstimateIssue::from)
        .and_then(|features| {
            let price = estimate(app.model.as_ref(), &features, location.multiplier())?;
            Ok((features, format_usd(price)))
        });

    let price = match price {
        Ok((features, formatted)) => {
            app.sessions
                .with_session(session, |s| s.record(features, &form.zip, formatted.clone(), now))?;
            tracing::info!(zip = %form.zip, price = %formatted, multiplier = location.multiplier(), "estimate recorded");
            Ok(formatted)
        }
        Err(EstimateIssue::Estimate(EstimateError::ModelFailure(e))) => {
            tracing::error!(error = %e, "model invocation failed");
            Err(EstimateIssue::Estimate(EstimateError::ModelFailure(e)))
        }
        Err(issue) => {
            tracing::info!(error = %issue, "estimate rejected");
            Err(issue)
        }
    };

    Ok(EstimateReport { location, price })
}
