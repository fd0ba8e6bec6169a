//! Shared state types for the egui UI.

mod status;

pub use status::StatusBarState;

use crate::prediction::ClassificationResult;

/// Top-level UI model consumed by the egui renderer.
///
/// Holds only what the screen shows; nothing here outlives the window.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Text the user is editing.
    pub input: String,
    /// Last successful classification for the current input.
    pub result: Option<ClassificationResult>,
    /// True strictly between issuing a request and its settlement.
    pub loading: bool,
    /// Reason the last request failed, if it did.
    pub last_error: Option<String>,
    pub status: StatusBarState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            result: None,
            loading: false,
            last_error: None,
            status: StatusBarState::idle(),
        }
    }
}

/// Where the single classification request currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl UiState {
    pub fn phase(&self) -> RequestPhase {
        if self.loading {
            RequestPhase::Pending
        } else if self.result.is_some() {
            RequestPhase::Succeeded
        } else if self.last_error.is_some() {
            RequestPhase::Failed
        } else {
            RequestPhase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::Label;

    #[test]
    fn phase_follows_flags() {
        let mut state = UiState::default();
        assert_eq!(state.phase(), RequestPhase::Idle);
        state.loading = true;
        assert_eq!(state.phase(), RequestPhase::Pending);
        state.loading = false;
        state.last_error = Some("boom".into());
        assert_eq!(state.phase(), RequestPhase::Failed);
        state.last_error = None;
        state.result = Some(ClassificationResult::new(Label::Toxic, 0.5).unwrap());
        assert_eq!(state.phase(), RequestPhase::Succeeded);
    }
}
