//! Result display configuration.

use serde::{Deserialize, Serialize};

/// How outcome messages are turned into the headline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// `refine` only successful predictions; show errors verbatim.
    #[default]
    Separated,
    /// `refine` every message, errors included. A status code in an error
    /// message is shown as if it were the prediction.
    Legacy,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Separated => "separated",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "separated" => Ok(Self::Separated),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default: `separated`.
    pub mode: Option<DisplayMode>,
}

impl DisplayConfig {
    pub fn effective_mode(&self) -> DisplayMode {
        self.mode.unwrap_or_default()
    }
}
