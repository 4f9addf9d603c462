//! Tests for the terminal front end.

use std::path::PathBuf;

use clap::Parser;
use premium_cli::commands::{parse_line, run_repl, ReplCommand};
use premium_cli::{Cli, Commands, PredictCommand};
use premium_core::{DisplayMode, IPredictionClient, InputField, InputSet, PredictionOutcome, PremiumConfig};
use serde_json::json;

/// Answers every request with the same outcome.
struct FixedClient(PredictionOutcome);

impl IPredictionClient for FixedClient {
    fn predict(&self, _inputs: &InputSet) -> PredictionOutcome {
        self.0.clone()
    }
}

fn repl(lines: &[&str], outcome: PredictionOutcome, mode: DisplayMode) -> (bool, String) {
    let (tx, rx) = crossbeam_channel::unbounded();
    for line in lines {
        tx.send(line.to_string()).unwrap();
    }
    drop(tx);
    let mut out = Vec::new();
    let ok = run_repl(FixedClient(outcome), rx, mode, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_line() {
    assert_eq!(
        parse_line("age 30"),
        Ok(ReplCommand::Set(InputField::Age, "30".into()))
    );
    assert_eq!(
        parse_line("  Height   170.5 "),
        Ok(ReplCommand::Set(InputField::Height, "170.5".into()))
    );
    assert_eq!(
        parse_line("weight"),
        Ok(ReplCommand::Set(InputField::Weight, String::new()))
    );
    assert_eq!(parse_line("predict"), Ok(ReplCommand::Predict));
    assert_eq!(parse_line(""), Ok(ReplCommand::Blank));
    assert_eq!(parse_line("exit"), Ok(ReplCommand::Quit));
    assert!(parse_line("dance").is_err());
}

#[test]
fn test_repl_success() {
    let (ok, out) = repl(
        &["age 30", "height 170", "weight 65", "predict"],
        PredictionOutcome::success(json!(733.5)),
        DisplayMode::Separated,
    );
    assert!(ok);
    assert!(out.contains("Predicting..."));
    assert!(out.contains("💰 733.50"));
    assert!(out.contains("📏 Height: 170 cm"));
}

#[test]
fn test_repl_validation_error_sends_nothing() {
    let (ok, out) = repl(
        &["age 30", "predict"],
        PredictionOutcome::success(json!(1)),
        DisplayMode::Separated,
    );
    assert!(!ok);
    assert!(out.contains("⚠️ Please fill all fields!"));
    assert!(!out.contains("Predicting..."));
}

#[test]
fn test_repl_legacy_mode_shows_status_code() {
    let (_, out) = repl(
        &["age 30", "height 170", "weight 65", "predict"],
        PredictionOutcome::http_error(404, "Not Found"),
        DisplayMode::Legacy,
    );
    assert!(out.contains("💰 404.00"));
}

#[test]
fn test_repl_unknown_command() {
    let (_, out) = repl(&["jump"], PredictionOutcome::Pending, DisplayMode::Separated);
    assert!(out.contains("unknown command: jump"));
}

#[test]
fn test_predict_command() {
    let cmd = PredictCommand {
        age: "30".into(),
        height: "170".into(),
        weight: "65".into(),
    };
    let mut out = Vec::new();
    let ok = cmd
        .run_with(
            FixedClient(PredictionOutcome::http_error(422, "invalid age")),
            &PremiumConfig::default(),
            &mut out,
        )
        .unwrap();
    assert!(!ok);
    assert!(String::from_utf8(out).unwrap().contains("❌ Error 422: invalid age"));
}

#[test]
fn test_cli_parsing() {
    let cli = Cli::try_parse_from([
        "premium",
        "predict",
        "--age",
        "30",
        "--height",
        "170",
        "--weight",
        "65",
        "--timeout-ms",
        "1500",
        "--display-mode",
        "legacy",
    ])
    .unwrap();

    let overrides = cli.global.overrides();
    assert_eq!(overrides.timeout_ms, Some(1500));
    assert_eq!(overrides.display_mode, Some(DisplayMode::Legacy));
    assert_eq!(cli.global.config_root, PathBuf::from("."));
    match cli.command {
        Some(Commands::Predict(cmd)) => assert_eq!(cmd.height, "170"),
        other => panic!("expected predict, got {other:?}"),
    }
}

#[test]
fn test_cli_defaults_to_interactive() {
    let cli = Cli::try_parse_from(["premium", "--base-url", "http://h:1"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.global.base_url.as_deref(), Some("http://h:1"));
}
