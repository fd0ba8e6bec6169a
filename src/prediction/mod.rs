//! Client for the external toxicity prediction service.

pub mod api;
mod wire;

pub use api::PredictionClient;
pub use wire::{ClassificationResult, Label, PredictError, PredictRequest, parse_prediction};

/// Something that can label a piece of text.
///
/// Implementations block until the call settles; callers run them off the UI thread.
pub trait Classifier: Send + Sync {
    fn predict(&self, text: &str) -> Result<ClassificationResult, PredictError>;
}

impl Classifier for PredictionClient {
    fn predict(&self, text: &str) -> Result<ClassificationResult, PredictError> {
        PredictionClient::predict(self, text)
    }
}
