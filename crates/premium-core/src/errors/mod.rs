//! Error handling for the premium client.
//! One error enum per subsystem, `thiserror` only.
//!
//! These are internal failures. At the client boundary they are folded into
//! a [`PredictionOutcome`](crate::models::PredictionOutcome), which is what
//! callers pattern-match on.

pub mod client_error;
pub mod config_error;
pub mod error_code;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use error_code::PremiumErrorCode;
