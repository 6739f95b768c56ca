use crate::domain::property::PropertyForm;
use maud::{html, Markup};

pub fn property_form(form: &PropertyForm) -> Markup {
    html! {
        form
            class="card"
            method="post"
            action="/estimate"
            hx-post="/estimate"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-disabled-elt="button"
        {
            (number_field("bedrooms", "🛏 Bedrooms", &form.bedrooms, "0", None, "1"))
            (number_field("bathrooms", "🛁 Bathrooms", &form.bathrooms, "0", None, "1"))
            (number_field("living_area", "📐 Living Area (sq ft)", &form.living_area, "0", None, "any"))
            (number_field("condition", "🏗 Condition/Quality (1-5)", &form.condition, "1", Some("5"), "1"))
            (number_field("schools", "🏫 Nearby Schools", &form.schools, "0", None, "1"))

            div class="field" {
                label for="zip" { "📍 ZIP Code" }
                input
                    type="text"
                    id="zip"
                    name="zip"
                    value=(form.zip)
                    inputmode="numeric"
                    maxlength="5"
                    hx-get="/location"
                    hx-trigger="change"
                    hx-target="#location-panel"
                    hx-swap="outerHTML";
            }

            button type="submit" { "🔍 Predict House Price" }
        }
    }
}

fn number_field(
    name: &str,
    label: &str,
    value: &str,
    min: &str,
    max: Option<&str>,
    step: &str,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" id=(name) name=(name) value=(value) min=(min) max=[max] step=(step) required;
        }
    }
}
