use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not read model artifact: {0}")]
    Io(String),
    #[error("malformed model artifact: {0}")]
    Artifact(String),
    #[error("expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("model returned no output")]
    EmptyOutput,
    #[error("model returned a non-finite value")]
    NonFinite,
    #[error("model unavailable: {0}")]
    Unavailable(String),
}
