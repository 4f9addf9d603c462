//! # premium-core
//!
//! Foundation crate for the premium prediction client.
//! Defines the input and outcome models, the `refine` display routine,
//! errors, config, tracing setup, and the client trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod refine;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{ClientConfig, DisplayMode, PremiumConfig};
pub use errors::{ClientError, ConfigError};
pub use models::{InputField, InputSet, PredictionOutcome, TransportFailure};
pub use refine::refine;
pub use traits::IPredictionClient;
