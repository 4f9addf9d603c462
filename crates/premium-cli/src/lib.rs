//! Terminal front end for the premium prediction client.
//!
//! ```bash
//! # One prediction, printed as a result panel
//! premium predict --age 30 --height 170 --weight 65
//!
//! # Line-oriented session: `age 30`, `height 170`, `weight 65`, `predict`
//! premium interactive --base-url http://127.0.0.1:8000
//! ```

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use premium_core::config::CliOverrides;
use premium_core::DisplayMode;

pub use commands::{InteractiveCommand, PredictCommand};

/// Insurance premium prediction from age, height, and weight.
#[derive(Parser, Debug)]
#[command(name = "premium")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `interactive`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one prediction request and print the result
    Predict(PredictCommand),

    /// Edit fields and submit from a line-oriented prompt
    Interactive(InteractiveCommand),
}

/// Options shared by every command. Each overrides the config file and
/// `PREMIUM_*` environment variables.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Base URL of the prediction service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Endpoint path on the prediction service
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Request timeout in milliseconds (no timeout when omitted)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// How results are rendered: `separated` or `legacy`
    #[arg(long, global = true)]
    pub display_mode: Option<DisplayMode>,

    /// Directory searched for `premium.toml`
    #[arg(long, global = true, default_value = ".")]
    pub config_root: PathBuf,
}

impl GlobalArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            timeout_ms: self.timeout_ms,
            display_mode: self.display_mode,
        }
    }
}
