//! Pure derivations from UI state to what the renderer draws.
//!
//! Nothing here is cached; the renderer recomputes every frame from the
//! current [`UiState`](crate::egui_app::state::UiState).

use crate::prediction::{ClassificationResult, Label};

pub const TITLE: &str = "🛡️ Toxicity Checker";
pub const SUBTITLE: &str = "✍️ Paste text below to detect toxic language in Kreol Mauricien";
pub const INPUT_HINT: &str = "💬 Type or paste your text here…";
pub const CLEAR_LABEL: &str = "🧹 Clear";

const ANALYZE_LABEL: &str = "🚀 Analyze Text";
const ANALYZING_LABEL: &str = "🔍 Analyzing…";
const TOXIC_VERDICT: &str = "⚠️ Toxic content detected";
const SAFE_VERDICT: &str = "✅ Content looks safe";

/// Which styling path a result takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTone {
    Toxic,
    Safe,
}

/// Everything the results panel shows for one classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub verdict: &'static str,
    /// Bar fill and displayed confidence, 0..=100.
    pub percent: u8,
    pub confidence_text: String,
    pub tone: ResultTone,
}

/// `round(confidence * 100)`, clamped to 0..=100.
pub fn confidence_percent(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn is_toxic(result: &ClassificationResult) -> bool {
    result.label() == Label::Toxic
}

pub fn result_view(result: &ClassificationResult) -> ResultView {
    let percent = confidence_percent(result.confidence());
    let (verdict, tone) = if is_toxic(result) {
        (TOXIC_VERDICT, ResultTone::Toxic)
    } else {
        (SAFE_VERDICT, ResultTone::Safe)
    };
    ResultView {
        verdict,
        percent,
        confidence_text: format!("📊 Confidence: {percent}%"),
        tone,
    }
}

pub fn analyze_label(loading: bool) -> &'static str {
    if loading {
        ANALYZING_LABEL
    } else {
        ANALYZE_LABEL
    }
}

pub fn failure_text(reason: &str) -> String {
    format!("❌ Classification failed: {reason}")
}
