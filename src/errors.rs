// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors that end a request with an error page. Domain failures
/// (bad ZIP, geocoder down, model error) never get here; they are shown
/// inline on the form.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
