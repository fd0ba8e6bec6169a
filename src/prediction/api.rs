//! Blocking HTTP client for `POST {base_url}/predict`.

use std::io::Read;
use std::time::Duration;

use crate::config::ServiceEndpoint;

use super::wire::{ClassificationResult, PredictError, PredictRequest, parse_prediction};

const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;
/// Connection setup only; reading the answer is bounded by the endpoint's timeout, if any.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends text to the prediction service and validates the answer.
#[derive(Clone, Debug)]
pub struct PredictionClient {
    agent: ureq::Agent,
    predict_url: String,
}

impl PredictionClient {
    pub fn new(endpoint: &ServiceEndpoint) -> Self {
        Self {
            agent: build_agent(endpoint.timeout()),
            predict_url: endpoint.predict_url(),
        }
    }

    /// Classify `text` exactly as given; no trimming or re-encoding is applied.
    pub fn predict(&self, text: &str) -> Result<ClassificationResult, PredictError> {
        let request = self
            .agent
            .post(&self.predict_url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(PredictRequest { text }) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = read_body(response).unwrap_or_else(|err| err);
                return Err(PredictError::status(code, &body));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(PredictError::Transport(err.to_string()));
            }
        };

        // ureq only surfaces 4xx/5xx as errors.
        let code = response.status();
        if !(200..300).contains(&code) {
            let body = read_body(response).unwrap_or_else(|err| err);
            return Err(PredictError::status(code, &body));
        }

        let body = read_body(response).map_err(PredictError::InvalidResponse)?;
        parse_prediction(&body)
    }
}

fn build_agent(io_timeout: Option<Duration>) -> ureq::Agent {
    let builder = ureq::AgentBuilder::new().timeout_connect(CONNECT_TIMEOUT);
    match io_timeout {
        Some(limit) => builder.timeout_read(limit).timeout_write(limit),
        None => builder,
    }
    .build()
}

/// Read at most [`MAX_PREDICT_RESPONSE_BYTES`] of UTF-8 text.
fn read_body(response: ureq::Response) -> Result<String, String> {
    let mut body = Vec::new();
    response
        .into_reader()
        .take(MAX_PREDICT_RESPONSE_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .map_err(|err| format!("failed to read response: {err}"))?;
    if body.len() > MAX_PREDICT_RESPONSE_BYTES {
        return Err(format!(
            "response larger than {MAX_PREDICT_RESPONSE_BYTES} bytes"
        ));
    }
    String::from_utf8(body).map_err(|err| format!("response is not UTF-8: {err}"))
}
