mod linear;
mod model_error;

pub use linear::LinearModel;
pub use model_error::ModelError;

/// A pre-trained regression model: a feature vector in, one or more
/// outputs back. Only the first output is used as the price.
pub trait PriceModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Stands in when the artifact failed to load so the form keeps working
/// and every prediction reports the load error instead.
pub struct UnavailableModel {
    reason: String,
}

impl UnavailableModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PriceModel for UnavailableModel {
    fn predict(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::Unavailable(self.reason.clone()))
    }
}

/// Load the artifact at `path`, degrading to [`UnavailableModel`] on failure.
pub fn load_or_unavailable(path: &str) -> Box<dyn PriceModel> {
    match LinearModel::load(path) {
        Ok(model) => {
            tracing::info!(path, features = model.feature_count(), "model loaded");
            Box::new(model)
        }
        Err(e) => {
            tracing::error!(path, error = %e, "model failed to load; predictions disabled");
            Box::new(UnavailableModel::new(e.to_string()))
        }
    }
}
