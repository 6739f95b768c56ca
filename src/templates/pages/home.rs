// templates/pages/home.rs

use crate::domain::logic::{EstimateIssue, LocationContext};
use crate::domain::property::PropertyForm;
use crate::sessions::{FeedbackRating, PredictionRecord, RatingError};
use crate::templates::{
    components::{estimate_banner, feedback_widget, history_table, location_panel, property_form},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm {
    pub form: PropertyForm,
    pub location: LocationContext,
    /// Present only right after a submission.
    pub estimate: Option<Result<String, EstimateIssue>>,
    pub history: Vec<PredictionRecord>,
    pub rating: u8,
    pub feedback: Option<Result<FeedbackRating, RatingError>>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "USA House Price Prediction App",
        html! {
            main class="container" {
                h1 { "🏠 USA House Price Prediction App" }
                h3 { "📊 Powered by Machine Learning/AI - Enter House property details below" }

                (property_form(&vm.form))

                div id="results" {
                    (results_fragment(vm))
                }

                (feedback_widget(vm.rating, vm.feedback.as_ref()))

                form method="post" action="/session/clear" style="text-align: center;" {
                    button type="submit" class="link" { "Start over (clear history)" }
                }
            }
        },
    )
}

/// Location panel, estimate and history. Swapped into `#results` by htmx
/// after a submission.
pub fn results_fragment(vm: &HomeVm) -> Markup {
    html! {
        (location_panel(&vm.location))
        (estimate_banner(vm.estimate.as_ref()))
        (history_table(&vm.history))
    }
}
