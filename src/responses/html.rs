use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// 302 to `location` with extra headers (e.g. `Set-Cookie`).
pub fn redirect(location: &str, headers: &[(&str, String)]) -> ResultResp {
    let mut builder = ResponseBuilder::new().status(302).header("Location", location);

    for (name, value) in headers {
        builder = builder.header(*name, value.as_str());
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
