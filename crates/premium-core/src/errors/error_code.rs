//! PremiumErrorCode trait for structured error strings.

/// Every error enum implements this to expose a stable code string
/// for log lines and the CLI.
pub trait PremiumErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONNECT_ERROR: &str = "CONNECT_ERROR";
pub const TIMEOUT: &str = "TIMEOUT";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const MISSING_PREDICTION: &str = "MISSING_PREDICTION";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
