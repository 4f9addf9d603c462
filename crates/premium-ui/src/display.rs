//! Plain-text rendering of the result panel.

use premium_core::{refine, DisplayMode, PredictionOutcome};

use crate::state::UiState;

pub const PANEL_TITLE: &str = "🔹 Insurance Premium Prediction";
pub const PANEL_SUBTITLE: &str = "Based on Age, Height, and Weight";
pub const SUBMIT_LABEL: &str = "🚀 Predict Now";
pub const LOADING_LABEL: &str = "Predicting...";

/// Headline value for an outcome.
pub fn render_result(outcome: &PredictionOutcome, mode: DisplayMode) -> String {
    match (mode, outcome) {
        (DisplayMode::Legacy, _) | (DisplayMode::Separated, PredictionOutcome::Success { .. }) => {
            refine(&outcome.message())
        }
        (DisplayMode::Separated, _) => outcome.message(),
    }
}

/// Label for the submit control.
pub fn submit_label(state: &UiState) -> &'static str {
    if state.loading {
        LOADING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// The full result panel, or `None` while it is hidden.
///
/// The inputs summary reflects the current field values, which may have been
/// edited since the request was sent.
pub fn render_panel(state: &UiState, mode: DisplayMode) -> Option<String> {
    if !state.show_result {
        return None;
    }
    let outcome = state.outcome.as_ref()?;
    let inputs = &state.inputs;
    Some(
        [
            PANEL_TITLE.to_string(),
            PANEL_SUBTITLE.to_string(),
            format!("💰 {}", render_result(outcome, mode)),
            String::new(),
            format!("🧑 Age: {}", inputs.age),
            format!("📏 Height: {} cm", inputs.height),
            format!("⚖️ Weight: {} kg", inputs.weight),
        ]
        .join("\n"),
    )
}
