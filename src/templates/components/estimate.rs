use crate::domain::logic::EstimateIssue;
use crate::domain::pricing::EstimateError;
use maud::{html, Markup};

/// Message for an estimate that could not be produced.
pub fn estimate_error_message(issue: &EstimateIssue) -> String {
    match issue {
        EstimateIssue::Input(e) => e.to_string(),
        EstimateIssue::Estimate(EstimateError::InvalidInput) => {
            "Please enter a valid living area (greater than 0).".to_string()
        }
        EstimateIssue::Estimate(EstimateError::ModelFailure(e)) => format!("Prediction failed: {e}"),
    }
}

pub fn estimate_banner(price: Option<&Result<String, EstimateIssue>>) -> Markup {
    html! {
        @match price {
            Some(Ok(price)) => {
                p class="success" id="estimate" {
                    "🏠 Estimated House Price: " strong { (price) }
                }
            },
            Some(Err(issue)) => {
                p class="error" id="estimate" { (estimate_error_message(issue)) }
            },
            None => {
                p class="info" id="estimate" {
                    "👈 Enter values above and click " strong { "Predict House Price" } "."
                }
            },
        }
    }
}
