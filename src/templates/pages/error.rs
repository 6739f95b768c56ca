use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container" {
                (card(&format!("Error {status}"), html! {
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }))
            }
        },
    )
}
