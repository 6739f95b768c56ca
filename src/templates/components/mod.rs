use maud::{html, Markup};

pub mod estimate;
pub mod feedback;
pub mod history;
pub mod location;
pub mod property_form;

pub use estimate::estimate_banner;
pub use feedback::{feedback_result, feedback_widget};
pub use history::history_table;
pub use location::location_panel;
pub use property_form::property_form;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
