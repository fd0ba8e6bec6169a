//! Interaction controller for the classification screen.

mod jobs;

use crate::egui_app::state::{RequestPhase, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;
use crate::prediction::{ClassificationResult, Classifier, PredictError};
use jobs::{ClassificationOutcome, ControllerJobs, JobMessage};
use std::sync::Arc;

/// Owns the screen state and runs prediction calls off the UI thread.
pub struct EguiController {
    pub ui: UiState,
    classifier: Arc<dyn Classifier>,
    jobs: ControllerJobs,
    service_label: String,
}

impl EguiController {
    /// `service_label` names the endpoint in the status bar.
    pub fn new(classifier: Arc<dyn Classifier>, service_label: impl Into<String>) -> Self {
        Self {
            ui: UiState::default(),
            classifier,
            jobs: ControllerJobs::new(),
            service_label: service_label.into(),
        }
    }

    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    pub fn phase(&self) -> RequestPhase {
        self.ui.phase()
    }

    /// Replace the input text and drop anything shown for the old text.
    ///
    /// An in-flight request is abandoned: its answer would describe text that
    /// is no longer on screen.
    pub fn update_text(&mut self, text: impl Into<String>) {
        let had_outcome = self.ui.result.is_some() || self.ui.last_error.is_some();
        self.ui.input = text.into();
        self.ui.result = None;
        self.ui.last_error = None;
        if had_outcome {
            self.ui.status = StatusBarState::idle();
        }
        if self.ui.loading {
            self.abandon_pending("Edited while analyzing; request discarded");
        }
    }

    /// True when the Analyze action should be offered.
    pub fn can_request(&self) -> bool {
        !self.ui.loading && !self.ui.input.trim().is_empty()
    }

    /// True when the Clear action should be offered.
    pub fn can_reset(&self) -> bool {
        !self.ui.input.is_empty() || self.ui.result.is_some()
    }

    /// Send the current input for classification.
    ///
    /// Whitespace-only input and calls made while a request is pending are
    /// no-ops. Returns whether a request was issued.
    pub fn request_classification(&mut self) -> bool {
        if !self.can_request() {
            return false;
        }
        self.ui.result = None;
        self.ui.last_error = None;
        self.ui.loading = true;
        let text = self.ui.input.clone();
        let chars = text.chars().count();
        let request_id = self
            .jobs
            .begin_classification(Arc::clone(&self.classifier), text);
        tracing::debug!(request_id, chars, "Classification requested");
        self.set_status("Analyzing text…", StatusTone::Busy);
        true
    }

    /// Return to the initial empty state from anywhere.
    pub fn reset(&mut self) {
        if let Some(request_id) = self.jobs.abandon_classification() {
            tracing::debug!(request_id, "Pending classification abandoned by reset");
        }
        self.ui.input.clear();
        self.ui.result = None;
        self.ui.loading = false;
        self.ui.last_error = None;
        self.ui.status = StatusBarState::idle();
    }

    /// Apply any finished background work. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::Classified(outcome) => self.handle_classified(outcome),
            }
        }
    }

    /// True while a request is tracked and its answer has not been applied.
    pub fn classification_in_progress(&self) -> bool {
        self.jobs.classification_in_progress()
    }

    fn handle_classified(&mut self, outcome: ClassificationOutcome) {
        if !self.jobs.settle_classification(outcome.request_id) {
            tracing::debug!(
                request_id = outcome.request_id,
                "Discarding stale classification response"
            );
            return;
        }
        self.ui.loading = false;
        match outcome.result {
            Ok(result) => self.apply_result(result),
            Err(err) => self.apply_failure(err),
        }
    }

    fn apply_result(&mut self, result: ClassificationResult) {
        let percent = view_model::confidence_percent(result.confidence());
        tracing::info!(
            label = result.label().as_str(),
            confidence = result.confidence(),
            "Classification received"
        );
        self.ui.result = Some(result);
        self.ui.last_error = None;
        self.set_status(
            format!("Classified as {} ({percent}%)", result.label().as_str()),
            StatusTone::Info,
        );
    }

    fn apply_failure(&mut self, err: PredictError) {
        tracing::warn!("Classification failed: {err}");
        self.ui.result = None;
        self.ui.last_error = Some(err.to_string());
        self.set_status("Classification failed", StatusTone::Error);
    }

    fn abandon_pending(&mut self, status: &str) {
        if let Some(request_id) = self.jobs.abandon_classification() {
            tracing::debug!(request_id, "Pending classification abandoned");
        }
        self.ui.loading = false;
        self.set_status(status, StatusTone::Warning);
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
