//! Tests for tracing initialization.

use std::sync::Mutex;

use premium_core::tracing_setup::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_with_premium_log() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PREMIUM_LOG", "premium_client=debug,premium_ui=warn");
    init_tracing();
    std::env::remove_var("PREMIUM_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still logging after repeated init");
}
