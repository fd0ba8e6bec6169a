use serde::{Deserialize, Serialize};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Category returned by the prediction service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Toxic,
    NonToxic,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toxic => "toxic",
            Self::NonToxic => "non_toxic",
        }
    }
}

/// A validated classification: a label plus a confidence in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassificationResult {
    label: Label,
    confidence: f64,
}

impl ClassificationResult {
    /// Build a result, rejecting confidences that are not finite or outside `[0, 1]`.
    pub fn new(label: Label, confidence: f64) -> Result<Self, PredictError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(PredictError::InvalidResponse(format!(
                "confidence {confidence} is outside [0, 1]"
            )));
        }
        Ok(Self { label, confidence })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Body of `POST /predict`.
#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictionWire {
    label: Label,
    confidence: f64,
}

/// Failure of a single prediction call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("Could not reach the prediction service: {0}")]
    Transport(String),
    #[error("Prediction service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),
}

impl PredictError {
    pub(crate) fn status(code: u16, body: &str) -> Self {
        Self::Status {
            code,
            body: truncate_for_display(body.trim()),
        }
    }
}

/// Parse and validate a `/predict` response body.
pub fn parse_prediction(body: &str) -> Result<ClassificationResult, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::InvalidResponse("empty response body".into()));
    }
    let invalid = |reason: String| {
        PredictError::InvalidResponse(format!("{reason}: {}", truncate_for_display(trimmed)))
    };
    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|err| invalid(err.to_string()))?;
    // A derived struct also accepts a positional array; only an object is a prediction.
    if !value.is_object() {
        return Err(invalid("expected a JSON object".into()));
    }
    let wire: PredictionWire =
        serde_json::from_value(value).map_err(|err| invalid(err.to_string()))?;
    ClassificationResult::new(wire.label, wire.confidence)
}

fn truncate_for_display(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    cut.push('…');
    cut
}
