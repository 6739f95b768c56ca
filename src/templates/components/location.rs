use crate::domain::logic::{LocationContext, LocationIssue};
use crate::domain::zip::ZipError;
use crate::geocoding::GeocodingError;
use maud::{html, Markup};

const FALLBACK_SUFFIX: &str = "Using default US center location.";

/// User-facing explanation for a location fallback.
pub fn location_notice(issue: &LocationIssue) -> String {
    match issue {
        LocationIssue::Zip(ZipError::InvalidFormat) => {
            format!("Error: ZIP code must be a 5-digit number. {FALLBACK_SUFFIX}")
        }
        LocationIssue::Zip(ZipError::OutOfRange | ZipError::ExcludedTerritory) => {
            format!("Error: ZIP code must be a valid US ZIP code. {FALLBACK_SUFFIX}")
        }
        LocationIssue::Geocoding(GeocodingError::NotFound) => {
            format!("Error: Invalid ZIP code or geocoding failed. {FALLBACK_SUFFIX}")
        }
        LocationIssue::Geocoding(GeocodingError::Timeout) => {
            format!("Geocoding timed out. Please try again later. {FALLBACK_SUFFIX}")
        }
        LocationIssue::Geocoding(GeocodingError::QuotaExceeded) => format!(
            "API rate limit exceeded. Please wait a moment and try again. {FALLBACK_SUFFIX}"
        ),
        LocationIssue::Geocoding(GeocodingError::Failed(msg)) => {
            format!("Map rendering or geocoding failed: {msg}. {FALLBACK_SUFFIX}")
        }
    }
}

pub fn location_panel(ctx: &LocationContext) -> Markup {
    let center = ctx.center();
    let (popup, tooltip) = match &ctx.outcome {
        Ok(_) => (format!("ZIP: {}", ctx.zip), "Estimated Location"),
        Err(_) => ("Default Location".to_string(), "US Center"),
    };

    html! {
        section class="card" id="location-panel" {
            h2 { "🗺 Location Context" }

            @if let Err(issue) = &ctx.outcome {
                p class="error" { (location_notice(issue)) }
            }

            div
                id="location-map"
                data-lat=(center.latitude)
                data-lon=(center.longitude)
                data-popup=(popup)
                data-tooltip=(tooltip)
            {}

            @if let Ok((location, adjustment)) = &ctx.outcome {
                p {
                    "Location adjustment for ZIP " (ctx.zip) ": " (adjustment.description)
                }
                @if location.has_known_state() {
                    p class="attribution" { "Resolved state: " (location.state) }
                } @else {
                    p class="attribution" { "State could not be determined for this ZIP." }
                }
            }

            p class="attribution" {
                "Map data © "
                a href="https://www.openstreetmap.org/copyright" { "OpenStreetMap" }
                " contributors"
            }
        }
    }
}
