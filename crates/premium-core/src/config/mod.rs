//! Configuration system for the premium client.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod client_config;
pub mod defaults;
pub mod display_config;
pub mod premium_config;

pub use client_config::ClientConfig;
pub use display_config::{DisplayConfig, DisplayMode};
pub use premium_config::{CliOverrides, PremiumConfig};
