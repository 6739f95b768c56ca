use crate::sessions::{FeedbackRating, RatingError};
use maud::{html, Markup};

/// Rating slider. `current` is the slider position; `result` is the outcome
/// of a submission made on this request, if any.
pub fn feedback_widget(current: u8, result: Option<&Result<FeedbackRating, RatingError>>) -> Markup {

    html! {
        section class="card" id="feedback" {
            h2 { "💬 Feedback" }
            form
                method="post"
                action="/feedback"
                hx-post="/feedback"
                hx-target="#feedback-result"
                hx-swap="innerHTML"
            {
                label for="rating" {
                    "How accurate was this prediction? (1 = Poor, 5 = Excellent)"
                }
                input
                    type="range"
                    id="rating"
                    name="rating"
                    min="1"
                    max="5"
                    step="1"
                    value=(current)
                    title="Slide the star to rate the prediction accuracy from 1 (Poor) to 5 (Excellent)";
                button type="submit" { "Submit Feedback" }
            }
            div id="feedback-result" {
                @if let Some(result) = result {
                    (feedback_result(result))
                }
            }
        }
    }
}

pub fn feedback_result(result: &Result<FeedbackRating, RatingError>) -> Markup {
    html! {
        @match result {
            Ok(rating) => p class="success" {
                "Thank you for your feedback! Rating: " (rating.value()) "/5"
            },
            Err(e) => p class="error" { (e.to_string()) },
        }
    }
}
