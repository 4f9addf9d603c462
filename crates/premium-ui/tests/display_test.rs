//! Tests for result rendering.

use premium_core::{DisplayMode, InputSet, PredictionOutcome, TransportFailure};
use premium_ui::display::{render_panel, render_result, submit_label, LOADING_LABEL, SUBMIT_LABEL};
use premium_ui::state::{reduce, UiEvent, UiState};
use serde_json::json;

#[test]
fn test_success_is_refined_in_both_modes() {
    let outcome = PredictionOutcome::success(json!([12345.67]));
    assert_eq!(render_result(&outcome, DisplayMode::Separated), "12345.67");
    assert_eq!(render_result(&outcome, DisplayMode::Legacy), "12345.67");
}

#[test]
fn test_legacy_mode_surfaces_status_code() {
    let outcome = PredictionOutcome::http_error(404, "Not Found");
    assert_eq!(render_result(&outcome, DisplayMode::Legacy), "404.00");
    assert_eq!(
        render_result(&outcome, DisplayMode::Separated),
        "❌ Error 404: Not Found"
    );
}

#[test]
fn test_legacy_mode_validation_and_transport_are_na() {
    assert_eq!(
        render_result(&PredictionOutcome::ValidationError, DisplayMode::Legacy),
        "N/A"
    );
    assert_eq!(
        render_result(
            &PredictionOutcome::transport(TransportFailure::Connect),
            DisplayMode::Legacy
        ),
        "N/A"
    );
}

#[test]
fn test_panel_hidden_until_resolved() {
    let state = reduce(&UiState::new(InputSet::new("30", "170", "65")), UiEvent::Submit).state;
    assert_eq!(render_panel(&state, DisplayMode::Separated), None);
    assert_eq!(submit_label(&state), LOADING_LABEL);
}

#[test]
fn test_panel_contents() {
    let state = UiState::new(InputSet::new("30", "170", "65"));
    let loading = reduce(&state, UiEvent::Submit).state;
    let done = reduce(
        &loading,
        UiEvent::Resolved {
            request_id: 0,
            outcome: PredictionOutcome::success(json!(733.5)),
        },
    )
    .state;

    let panel = render_panel(&done, DisplayMode::Separated).unwrap();
    assert!(panel.contains("💰 733.50"));
    assert!(panel.contains("🧑 Age: 30"));
    assert!(panel.contains("📏 Height: 170 cm"));
    assert!(panel.contains("⚖️ Weight: 65 kg"));
    assert_eq!(submit_label(&done), SUBMIT_LABEL);
}
