//! The tagged result of one prediction attempt.

use serde::Serialize;

pub const VALIDATION_MESSAGE: &str = "⚠️ Please fill all fields!";
pub const TRANSPORT_MESSAGE: &str = "❌ Network or parsing error";
pub const PENDING_MESSAGE: &str = "Predicting...";

/// Underlying cause of a transport failure.
///
/// Kept for logging only. Every kind renders the same generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportFailure {
    Connect,
    Timeout,
    Decode,
    MissingPrediction,
    Other,
}

impl TransportFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Decode => "decode",
            Self::MissingPrediction => "missing_prediction",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one submission attempt. Created fresh per attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// Request in flight.
    Pending,
    /// One or more inputs missing; no request was sent.
    ValidationError,
    /// The `prediction` field of a 2xx response, of whatever JSON type it had.
    Success { prediction: serde_json::Value },
    /// Non-2xx response with a best-effort message.
    HttpError { status: u16, message: String },
    /// Network failure or unusable response body.
    TransportError {
        failure: TransportFailure,
        message: String,
    },
}

impl PredictionOutcome {
    pub fn success(prediction: serde_json::Value) -> Self {
        Self::Success { prediction }
    }

    pub fn http_error(status: u16, message: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            message: message.into(),
        }
    }

    /// Transport failure with the generic user-facing message.
    pub fn transport(failure: TransportFailure) -> Self {
        Self::TransportError {
            failure,
            message: TRANSPORT_MESSAGE.to_string(),
        }
    }

    /// Textual representation of a successful prediction (JSON text).
    pub fn prediction_text(&self) -> Option<String> {
        match self {
            Self::Success { prediction } => Some(json_text(prediction)),
            _ => None,
        }
    }

    /// User-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Pending => PENDING_MESSAGE.to_string(),
            Self::ValidationError => VALIDATION_MESSAGE.to_string(),
            Self::Success { prediction } => format!("🎉 Prediction: {}", json_text(prediction)),
            Self::HttpError { status, message } => format!("❌ Error {status}: {message}"),
            Self::TransportError { message, .. } => message.clone(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::ValidationError => "validation_error",
            Self::Success { .. } => "success",
            Self::HttpError { .. } => "http_error",
            Self::TransportError { .. } => "transport_error",
        }
    }
}

impl From<&crate::errors::ClientError> for PredictionOutcome {
    fn from(err: &crate::errors::ClientError) -> Self {
        Self::transport(err.failure())
    }
}

// Floats with an exact integer value up to this magnitude print without a
// fractional part, so `100.0` reads `100`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Compact JSON text of `value`, with integral floats written as integers.
pub fn json_text(value: &serde_json::Value) -> String {
    integral_floats_as_integers(value).to_string()
}

fn integral_floats_as_integers(value: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(x) if x.fract() == 0.0 && x.abs() < MAX_EXACT_INTEGER => Value::from(x as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats_as_integers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats_as_integers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
