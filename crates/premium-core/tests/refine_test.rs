//! Tests for numeric extraction.

use premium_core::models::PredictionOutcome;
use premium_core::refine;
use premium_core::refine::first_number;
use proptest::prelude::*;

#[test]
fn test_bracketed_prediction() {
    assert_eq!(refine("[12345.67]"), "12345.67");
}

#[test]
fn test_no_numbers() {
    assert_eq!(refine("no numbers here"), "N/A");
    assert_eq!(refine(""), "N/A");
}

/// The status code in an error message is picked up as if it were a value.
#[test]
fn test_status_code_is_extracted_from_error_text() {
    assert_eq!(first_number("❌ Error 404: Not Found"), Some(404.0));
    assert_eq!(refine("❌ Error 404: Not Found"), "404.00");
}

#[test]
fn test_first_match_wins() {
    assert_eq!(refine("a 1.5 b 2.5"), "1.50");
    assert_eq!(refine("❌ Error 422: invalid age 30"), "422.00");
}

#[test]
fn test_rounds_to_two_digits() {
    assert_eq!(refine("733.5"), "733.50");
    assert_eq!(refine("1.239"), "1.24");
    assert_eq!(refine("42"), "42.00");
}

#[test]
fn test_exact_halfway_rounds_up() {
    assert_eq!(refine("0.125"), "0.13");
    assert_eq!(refine("733.125"), "733.13");
    assert_eq!(refine("1.375"), "1.38");
    assert_eq!(refine("2.625"), "2.63");
    assert_eq!(refine("Prediction: [0.875]"), "0.88");
    assert_eq!(refine("99.995"), "100.00");
}

#[test]
fn test_near_halfway_follows_binary_value() {
    // 1.005 is stored just below the halfway point.
    assert_eq!(refine("1.005"), "1.00");
    assert_eq!(refine("1.015"), "1.01");
    assert_eq!(refine("0.25"), "0.25");
}

#[test]
fn test_sign_and_trailing_dot_are_not_part_of_number() {
    assert_eq!(refine("-12"), "12.00");
    assert_eq!(refine("12."), "12.00");
    assert_eq!(refine(".5"), "5.00");
}

#[test]
fn test_refine_on_success_message() {
    let outcome = PredictionOutcome::success(serde_json::json!(733.5));
    let message = outcome.message();
    assert!(message.contains("733.5"));
    assert_eq!(refine(&message), "733.50");
}

#[test]
fn test_refine_on_array_prediction() {
    let outcome = PredictionOutcome::success(serde_json::json!([12345.67]));
    assert_eq!(refine(&outcome.message()), "12345.67");
}

proptest! {
    #[test]
    fn prop_eighths_round_up(whole in 0u32..1_000_000, idx in 0usize..4) {
        let (frac, rounded) = [("125", "13"), ("375", "38"), ("625", "63"), ("875", "88")][idx];
        prop_assert_eq!(refine(&format!("{whole}.{frac}")), format!("{whole}.{rounded}"));
    }

    #[test]
    fn prop_letters_only_yield_na(s in "[a-zA-Z :!?]{0,40}") {
        prop_assert_eq!(refine(&s), "N/A");
    }

    #[test]
    fn prop_output_has_two_decimals(n in 0u32..1_000_000, frac in 0u32..1000) {
        let text = format!("value: {n}.{frac:03} units");
        let out = refine(&text);
        let (_, decimals) = out.split_once('.').expect("fixed-point output");
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn prop_integer_prefix_is_preserved(n in 0u64..1_000_000_000, tail in "[a-z ]{1,10}[0-9]{0,4}") {
        let text = format!("x{n}{tail}");
        prop_assert_eq!(refine(&text), format!("{n}.00"));
    }
}
